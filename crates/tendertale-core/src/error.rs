//! Domain error types.

use thiserror::Error;

use crate::ids::{SceneId, UserId};

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No scene content exists for the identifier.
    #[error("scene not found: {0}")]
    SceneNotFound(SceneId),

    /// Content exists but could not be decoded.
    #[error("malformed content for {key}: {reason}")]
    MalformedContent {
        /// The scene or user identifier whose content failed to decode.
        key: String,
        /// Decoder error message.
        reason: String,
    },

    /// The user has no saved progress. Expected on a first session.
    #[error("no save state found for user {0}")]
    NoSaveState(UserId),

    /// The choice index does not address a choice of the scene.
    #[error("invalid choice index {index} for scene {scene_id} ({available} choices)")]
    InvalidChoice {
        /// The scene the choice was made in.
        scene_id: SceneId,
        /// The requested index.
        index: i64,
        /// Number of choices the scene offers.
        available: usize,
    },

    /// A choice points at a scene that cannot be loaded.
    #[error("broken transition: choice {choice} of scene {from} leads to {to}: {reason}")]
    BrokenTransition {
        /// The scene holding the choice.
        from: SceneId,
        /// The choice index.
        choice: usize,
        /// The unloadable target scene.
        to: SceneId,
        /// Why the target could not be loaded.
        reason: String,
    },

    /// Progress could not be read or written.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// An identifier cannot be mapped to a storage location.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure error outside of progress persistence.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Builds a `MalformedContent` error for the given storage key.
    pub fn malformed(key: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::MalformedContent {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}
