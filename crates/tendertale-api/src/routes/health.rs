//! Liveness and content-readiness endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when scenes can be served, `degraded` otherwise.
    pub status: &'static str,
    /// Server version.
    pub version: &'static str,
    /// Whether the scene content root is reachable.
    pub scenes: &'static str,
}

/// GET /health
///
/// Answers 503 while the scene content root cannot be reached.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, scenes) = match state.scene_repository.check_available().await {
        Ok(()) => (StatusCode::OK, "ok", "reachable"),
        Err(e) => {
            warn!(error = %e, "health check: scene content unavailable");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            scenes,
        }),
    )
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
