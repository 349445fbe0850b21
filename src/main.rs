use std::{path::Path, sync::Arc};

use anyhow::Context;
use axum::{
    handler::HandlerWithoutStateExt,
    routing::{delete, get, post},
    Router,
};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

mod config;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::store::ActivityStore;

/// Shared application state — cheap to clone (the store sits behind an Arc).
#[derive(Clone)]
pub struct AppState {
    pub activities: Arc<RwLock<ActivityStore>>,
}

impl AppState {
    pub fn new(store: ActivityStore) -> Self {
        Self {
            activities: Arc::new(RwLock::new(store)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,activities_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let store = ActivityStore::seeded();
    info!(count = store.activities().len(), "Loaded seed activities");

    if !config.static_dir.is_dir() {
        warn!(dir = %config.static_dir.display(), "Static directory not found; UI will return 404");
    }

    let app = build_router(AppState::new(store), &config.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── UI ──────────────────────────────────────────────────────────────
        .route("/", get(handlers::index))
        .nest_service(
            "/static",
            ServeDir::new(static_dir).not_found_service(handlers::not_found.into_service()),
        )

        // ── Activities ──────────────────────────────────────────────────────
        .route("/activities", get(handlers::activities::list_activities))
        .route(
            "/activities/:activity_name/signup",
            post(handlers::activities::signup),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(handlers::activities::unregister),
        )

        // Registered after the routes so every method router picks it up
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
