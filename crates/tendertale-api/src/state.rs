//! Shared application state.

use std::sync::Arc;

use tendertale_core::repository::{ProgressRepository, SceneRepository};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Scene content store.
    pub scene_repository: Arc<dyn SceneRepository>,
    /// Player progress store.
    pub progress_repository: Arc<dyn ProgressRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        scene_repository: Arc<dyn SceneRepository>,
        progress_repository: Arc<dyn ProgressRepository>,
    ) -> Self {
        Self {
            scene_repository,
            progress_repository,
        }
    }
}
