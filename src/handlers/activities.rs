use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use indexmap::IndexMap;
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::{Activity, EmailParams},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_activities(
    State(state): State<AppState>,
) -> (StatusCode, Json<IndexMap<String, Activity>>) {
    let activities = state.activities.read().await.activities().clone();

    debug!(count = activities.len(), "Listed activities");

    (StatusCode::OK, Json(activities))
}

// ── Sign up ───────────────────────────────────────────────────────────────────

pub async fn signup(
    State(state): State<AppState>,
    activity_name: Result<Path<String>, PathRejection>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Path(activity_name) = activity_name.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let Query(params) = params.map_err(|e| AppError::Unprocessable(e.body_text()))?;

    let email = state
        .activities
        .write()
        .await
        .signup(&activity_name, &params.email)?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": format!("Signed up {} for {}", email, activity_name),
        })),
    ))
}

// ── Unregister ────────────────────────────────────────────────────────────────

pub async fn unregister(
    State(state): State<AppState>,
    activity_name: Result<Path<String>, PathRejection>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Path(activity_name) = activity_name.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let Query(params) = params.map_err(|e| AppError::Unprocessable(e.body_text()))?;

    let email = state
        .activities
        .write()
        .await
        .unregister(&activity_name, &params.email)?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": format!("Unregistered {} from {}", email, activity_name),
        })),
    ))
}
