//! Route modules.

pub mod choice;
pub mod health;
pub mod progress;
pub mod scene;

use axum::Router;

use crate::state::AppState;

/// Returns every route, with the game API nested under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().merge(health::router()).nest(
        "/api",
        Router::new()
            .merge(scene::router())
            .merge(choice::router())
            .merge(progress::router()),
    )
}
