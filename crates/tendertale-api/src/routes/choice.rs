//! Routes for resolving player choices.

use axum::extract::State;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use tendertale_core::ids::{SceneId, UserId};
use tendertale_narrative::application::command_handlers::{self, PersistOutcome};
use tendertale_narrative::domain::commands;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Response header reporting whether the choice was recorded as progress.
pub const PROGRESS_HEADER: &str = "x-progress-persisted";

/// Request body for POST /choice.
#[derive(Debug, Deserialize)]
pub struct ChoiceRequest {
    /// The player making the choice.
    pub user_id: UserId,
    /// The scene the choice was made in.
    pub current_scene_id: SceneId,
    /// Zero-based index into the scene's choices.
    pub choice_index: i64,
}

/// POST /choice
#[instrument(
    skip(state, request),
    fields(
        user_id = %request.user_id,
        scene_id = %request.current_scene_id,
        choice_index = request.choice_index,
    )
)]
async fn resolve_choice(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ChoiceRequest>,
) -> Result<Response, ApiError> {
    let command = commands::ResolveChoice {
        correlation_id: Uuid::new_v4(),
        user_id: request.user_id,
        current_scene_id: request.current_scene_id,
        choice_index: request.choice_index,
    };

    info!(correlation_id = %command.correlation_id, "handling resolve_choice command");

    let resolution = command_handlers::handle_resolve_choice(
        &command,
        &*state.scene_repository,
        &*state.progress_repository,
    )
    .await?;

    let persisted = match resolution.persisted {
        PersistOutcome::Saved => "saved",
        PersistOutcome::Skipped { .. } => "skipped",
    };

    let mut response = Json(resolution.next_scene).into_response();
    response
        .headers_mut()
        .insert(PROGRESS_HEADER, HeaderValue::from_static(persisted));
    Ok(response)
}

/// Returns the router for choice resolution.
pub fn router() -> Router<AppState> {
    Router::new().route("/choice", post(resolve_choice))
}
