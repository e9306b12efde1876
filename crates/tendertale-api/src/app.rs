//! Router assembly.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::cors::{OriginPolicy, cors_layer};
use crate::routes;
use crate::state::AppState;

/// Builds the full application: all routes, request tracing and CORS.
pub fn build_app(state: AppState, origins: OriginPolicy) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(origins))
        .with_state(state)
}
