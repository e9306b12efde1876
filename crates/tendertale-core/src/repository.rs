//! Repository abstractions for scene content and player progress.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::ids::{SceneId, UserId};
use crate::progress::SaveState;
use crate::scene::Scene;

/// Read-only access to authored scenes.
#[async_trait]
pub trait SceneRepository: Send + Sync {
    /// Load a scene by identifier. Every call reads the backing content.
    ///
    /// # Errors
    ///
    /// `SceneNotFound` if no content exists for the id (including ids that
    /// are not valid storage keys), `MalformedContent` if it cannot be decoded.
    async fn load_scene(&self, scene_id: &SceneId) -> Result<Scene, DomainError>;

    /// Check that the backing content can be reached at all.
    ///
    /// # Errors
    ///
    /// `Infrastructure` if the content source is missing or unreadable.
    async fn check_available(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

/// Read/write access to one save state per user.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Overwrite the user's save state, creating storage if needed.
    ///
    /// # Errors
    ///
    /// `Persistence` on I/O failure, `InvalidIdentifier` if the user id is not
    /// a valid storage key.
    async fn save_progress(&self, user_id: &UserId, state: &SaveState)
    -> Result<(), DomainError>;

    /// Load the user's save state.
    ///
    /// # Errors
    ///
    /// `NoSaveState` if none exists, `Persistence` on other I/O failure,
    /// `MalformedContent` if the record cannot be decoded.
    async fn load_progress(&self, user_id: &UserId) -> Result<SaveState, DomainError>;

    /// Remove the user's save state.
    ///
    /// # Errors
    ///
    /// `NoSaveState` if none exists, `Persistence` on I/O failure.
    async fn delete_progress(&self, user_id: &UserId) -> Result<(), DomainError>;
}
