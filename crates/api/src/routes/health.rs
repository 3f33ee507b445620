//! Service metadata routes: the health check and the root endpoint catalog.

use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    pub message: &'static str,
    /// Current instant, RFC 3339.
    pub timestamp: String,
}

/// GET /health -- liveness probe.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Server is running",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// GET / -- endpoint catalog.
async fn service_info() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Village Council API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "posts": "/api/council/posts",
            "createPost": "POST /api/council/posts",
            "vote": "PUT /api/council/posts/{id}/vote",
            "delete": "DELETE /api/council/posts/{id}"
        }
    }))
}

/// Mount service metadata routes (root level, NOT under `/api/council`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(service_info))
}
