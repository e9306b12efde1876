//! Routes for loading, saving and deleting player progress.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tendertale_core::ids::UserId;
use tendertale_core::progress::SaveState;
use tendertale_narrative::application::{command_handlers, query_handlers};
use tendertale_narrative::domain::commands;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Confirmation body for writes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: &'static str,
}

/// GET /load/{user_id}
#[instrument(skip(state))]
async fn load_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<SaveState>, ApiError> {
    let save_state =
        query_handlers::get_progress(&UserId::from(user_id), &*state.progress_repository).await?;

    Ok(Json(save_state))
}

/// POST /save/{user_id}
#[instrument(skip(state, body))]
async fn save_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    JsonBody(body): JsonBody<SaveState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let command = commands::SaveProgress {
        correlation_id: Uuid::new_v4(),
        user_id: UserId::from(user_id),
        state: body,
    };

    info!(correlation_id = %command.correlation_id, "handling save_progress command");

    command_handlers::handle_save_progress(&command, &*state.progress_repository).await?;

    Ok(Json(MessageResponse {
        message: "Game state saved successfully",
    }))
}

/// DELETE /save/{user_id}
#[instrument(skip(state))]
async fn delete_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let command = commands::DeleteProgress {
        correlation_id: Uuid::new_v4(),
        user_id: UserId::from(user_id),
    };

    info!(correlation_id = %command.correlation_id, "handling delete_progress command");

    command_handlers::handle_delete_progress(&command, &*state.progress_repository).await?;

    Ok(Json(MessageResponse {
        message: "Save state deleted successfully",
    }))
}

/// Returns the router for player progress.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/load/{user_id}", get(load_progress))
        .route("/save/{user_id}", post(save_progress).delete(delete_progress))
}
