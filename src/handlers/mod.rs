pub mod activities;

use axum::{http::StatusCode, response::Redirect, Json};
use serde_json::json;

use crate::error::AppError;

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "activities-service" })))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("Method Not Allowed".to_string())
}

/// The browser UI lives under `/static`.
pub async fn index() -> Redirect {
    Redirect::temporary("/static/index.html")
}
