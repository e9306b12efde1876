//! Filesystem implementation of the `SceneRepository` trait.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use tendertale_core::error::DomainError;
use tendertale_core::ids::SceneId;
use tendertale_core::repository::SceneRepository;
use tendertale_core::scene::Scene;

/// File extension of scene documents.
const SCENE_EXTENSION: &str = "json";

/// Scene repository reading `<root>/<scene_id>.json` on every call.
#[derive(Debug, Clone)]
pub struct FsSceneRepository {
    root: PathBuf,
}

impl FsSceneRepository {
    /// Creates a repository rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The content root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a scene id to its file, or `None` if the id is not a storage key.
    fn path_for(&self, scene_id: &SceneId) -> Option<PathBuf> {
        scene_id
            .storage_key()
            .map(|key| self.root.join(format!("{key}.{SCENE_EXTENSION}")))
    }
}

#[async_trait]
impl SceneRepository for FsSceneRepository {
    async fn load_scene(&self, scene_id: &SceneId) -> Result<Scene, DomainError> {
        let Some(path) = self.path_for(scene_id) else {
            warn!(scene_id = %scene_id, "rejected scene id that is not a storage key");
            return Err(DomainError::SceneNotFound(scene_id.clone()));
        };

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DomainError::SceneNotFound(scene_id.clone()));
            }
            Err(e) => {
                return Err(DomainError::Infrastructure(format!(
                    "failed to read scene {scene_id}: {e}"
                )));
            }
        };

        debug!(scene_id = %scene_id, path = %path.display(), "loaded scene file");

        serde_json::from_slice(&bytes).map_err(|e| DomainError::malformed(scene_id.as_str(), e))
    }

    async fn check_available(&self) -> Result<(), DomainError> {
        match fs::metadata(&self.root).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(DomainError::Infrastructure(format!(
                "scene root {} is not a directory",
                self.root.display()
            ))),
            Err(e) => Err(DomainError::Infrastructure(format!(
                "scene root {} is unreachable: {e}",
                self.root.display()
            ))),
        }
    }
}
