//! Health HTTP Route

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// Health check at `/`
pub fn health_routes() -> Router {
    Router::new().route("/", get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().timestamp_millis(),
    };

    (StatusCode::OK, Json(response))
}
