use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
}

/// GET /healthz -- liveness only, no dependency checks.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Mount health check routes at root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/healthz", get(health_check))
}
