//! Test repositories — mock `ProgressRepository` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tendertale_core::error::DomainError;
use tendertale_core::ids::UserId;
use tendertale_core::progress::SaveState;
use tendertale_core::repository::ProgressRepository;

/// A progress repository backed by a map that also records every save.
#[derive(Debug, Default)]
pub struct InMemoryProgressRepository {
    states: Mutex<HashMap<UserId, SaveState>>,
    saves: Mutex<Vec<(UserId, SaveState)>>,
}

impl InMemoryProgressRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository with one existing save state.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_state(user_id: &str, state: SaveState) -> Self {
        let repo = Self::default();
        repo.states
            .lock()
            .unwrap()
            .insert(UserId::from(user_id), state);
        repo
    }

    /// Returns the current save state for `user_id`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn state_of(&self, user_id: &str) -> Option<SaveState> {
        self.states
            .lock()
            .unwrap()
            .get(&UserId::from(user_id))
            .cloned()
    }

    /// Returns a snapshot of every save performed, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saves(&self) -> Vec<(UserId, SaveState)> {
        self.saves.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn save_progress(&self, user_id: &UserId, state: &SaveState) -> Result<(), DomainError> {
        self.saves
            .lock()
            .unwrap()
            .push((user_id.clone(), state.clone()));
        self.states
            .lock()
            .unwrap()
            .insert(user_id.clone(), state.clone());
        Ok(())
    }

    async fn load_progress(&self, user_id: &UserId) -> Result<SaveState, DomainError> {
        self.states
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or_else(|| DomainError::NoSaveState(user_id.clone()))
    }

    async fn delete_progress(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.states
            .lock()
            .unwrap()
            .remove(user_id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NoSaveState(user_id.clone()))
    }
}

/// A progress repository that always returns a persistence error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingProgressRepository;

#[async_trait]
impl ProgressRepository for FailingProgressRepository {
    async fn save_progress(
        &self,
        _user_id: &UserId,
        _state: &SaveState,
    ) -> Result<(), DomainError> {
        Err(DomainError::Persistence("disk full".into()))
    }

    async fn load_progress(&self, _user_id: &UserId) -> Result<SaveState, DomainError> {
        Err(DomainError::Persistence("permission denied".into()))
    }

    async fn delete_progress(&self, _user_id: &UserId) -> Result<(), DomainError> {
        Err(DomainError::Persistence("permission denied".into()))
    }
}
