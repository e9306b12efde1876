//! Shared test doubles and fixtures for the Tendertale backend.

mod progress;
mod scene;

pub use progress::{FailingProgressRepository, InMemoryProgressRepository};
pub use scene::{InMemorySceneRepository, SceneBuilder};
