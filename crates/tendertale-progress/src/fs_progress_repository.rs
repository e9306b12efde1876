//! Filesystem implementation of the `ProgressRepository` trait.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use tendertale_core::error::DomainError;
use tendertale_core::ids::UserId;
use tendertale_core::progress::SaveState;
use tendertale_core::repository::ProgressRepository;

/// Progress repository storing `<root>/<user_id>.json`.
#[derive(Debug, Clone)]
pub struct FsProgressRepository {
    root: PathBuf,
}

impl FsProgressRepository {
    /// Creates a repository rooted at `root`. The directory is created lazily
    /// on the first save.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The saves directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl ProgressRepository for FsProgressRepository {
    async fn save_progress(&self, user_id: &UserId, state: &SaveState) -> Result<(), DomainError> {
        let key = user_id
            .storage_key()
            .ok_or_else(|| DomainError::InvalidIdentifier(user_id.to_string()))?;

        fs::create_dir_all(&self.root).await.map_err(|e| {
            DomainError::Persistence(format!(
                "failed to create saves directory {}: {e}",
                self.root.display()
            ))
        })?;

        let data = serde_json::to_vec_pretty(state)
            .map_err(|e| DomainError::Persistence(format!("failed to encode save state: {e}")))?;

        // Dot-prefixed temp names can never collide with a record.
        let target = self.path_for(key);
        let staging = self.root.join(format!(".{key}.{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&staging, &data).await {
            let _ = fs::remove_file(&staging).await;
            return Err(DomainError::Persistence(format!(
                "failed to write save file for user {user_id}: {e}"
            )));
        }
        if let Err(e) = fs::rename(&staging, &target).await {
            let _ = fs::remove_file(&staging).await;
            return Err(DomainError::Persistence(format!(
                "failed to replace save file for user {user_id}: {e}"
            )));
        }

        debug!(user_id = %user_id, scene_id = %state.current_scene_id, "wrote save state");
        Ok(())
    }

    async fn load_progress(&self, user_id: &UserId) -> Result<SaveState, DomainError> {
        let Some(key) = user_id.storage_key() else {
            return Err(DomainError::NoSaveState(user_id.clone()));
        };

        let bytes = match fs::read(self.path_for(key)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DomainError::NoSaveState(user_id.clone()));
            }
            Err(e) => {
                return Err(DomainError::Persistence(format!(
                    "failed to open save file for user {user_id}: {e}"
                )));
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| DomainError::malformed(user_id.as_str(), e))
    }

    async fn delete_progress(&self, user_id: &UserId) -> Result<(), DomainError> {
        let Some(key) = user_id.storage_key() else {
            return Err(DomainError::NoSaveState(user_id.clone()));
        };

        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => {
                debug!(user_id = %user_id, "deleted save state");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(DomainError::NoSaveState(user_id.clone()))
            }
            Err(e) => Err(DomainError::Persistence(format!(
                "failed to delete save file for user {user_id}: {e}"
            ))),
        }
    }
}
