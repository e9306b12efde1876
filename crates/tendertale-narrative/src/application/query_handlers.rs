//! Query handlers for the Narrative Engine.
//!
//! Thin pass-throughs to the repositories; no transition logic lives here.

use tendertale_core::error::DomainError;
use tendertale_core::ids::{SceneId, UserId};
use tendertale_core::progress::SaveState;
use tendertale_core::repository::{ProgressRepository, SceneRepository};
use tendertale_core::scene::Scene;

/// Retrieves a scene by its identifier.
///
/// # Errors
///
/// Returns `DomainError::SceneNotFound` if no such scene exists.
/// Returns `DomainError::MalformedContent` if it cannot be decoded.
pub async fn get_scene(
    scene_id: &SceneId,
    repo: &dyn SceneRepository,
) -> Result<Scene, DomainError> {
    repo.load_scene(scene_id).await
}

/// Retrieves a user's save state.
///
/// # Errors
///
/// Returns `DomainError::NoSaveState` if the user has never saved.
/// Returns `DomainError::Persistence` or `DomainError::MalformedContent` if
/// the record cannot be read.
pub async fn get_progress(
    user_id: &UserId,
    repo: &dyn ProgressRepository,
) -> Result<SaveState, DomainError> {
    repo.load_progress(user_id).await
}
