//! Routes serving scene content.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use tendertale_core::ids::SceneId;
use tendertale_core::scene::Scene;
use tendertale_narrative::application::query_handlers;
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /scene/{id}
#[instrument(skip(state))]
async fn get_scene(
    State(state): State<AppState>,
    Path(scene_id): Path<String>,
) -> Result<Json<Scene>, ApiError> {
    let scene =
        query_handlers::get_scene(&SceneId::from(scene_id), &*state.scene_repository).await?;

    Ok(Json(scene))
}

/// Returns the router for scene content.
pub fn router() -> Router<AppState> {
    Router::new().route("/scene/{id}", get(get_scene))
}
