//! Command handlers for the Narrative Engine.
//!
//! These functions orchestrate the repositories around a transition: load the
//! current scene, validate the choice, record progress, load the next scene.

use tendertale_core::command::Command;
use tendertale_core::error::DomainError;
use tendertale_core::ids::UserId;
use tendertale_core::progress::SaveState;
use tendertale_core::repository::{ProgressRepository, SceneRepository};
use tendertale_core::scene::Scene;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::commands::{DeleteProgress, ResolveChoice, SaveProgress};
use crate::domain::transition::select_choice;

/// How a progress write failure is treated by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    /// Log the failure as a warning and carry on.
    BestEffort,
    /// Fail the operation.
    Required,
}

/// What happened to a progress write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The save state was written.
    Saved,
    /// A best-effort write failed and was skipped.
    Skipped {
        /// The underlying failure.
        reason: String,
    },
}

/// Result of a resolved choice.
#[derive(Debug)]
pub struct ChoiceResolution {
    /// The scene the player moved to.
    pub next_scene: Scene,
    /// Whether the player's progress was recorded.
    pub persisted: PersistOutcome,
}

/// Writes `state` for `user_id` with the given durability.
///
/// # Errors
///
/// With `Durability::Required`, returns the repository error. With
/// `Durability::BestEffort` this never fails; the failure is logged and
/// reported as `PersistOutcome::Skipped`.
pub async fn persist_progress(
    user_id: &UserId,
    state: &SaveState,
    durability: Durability,
    repo: &dyn ProgressRepository,
) -> Result<PersistOutcome, DomainError> {
    match repo.save_progress(user_id, state).await {
        Ok(()) => Ok(PersistOutcome::Saved),
        Err(e) if durability == Durability::BestEffort => {
            warn!(
                user_id = %user_id,
                scene_id = %state.current_scene_id,
                error = %e,
                "failed to save progress, continuing without it"
            );
            Ok(PersistOutcome::Skipped {
                reason: e.to_string(),
            })
        }
        Err(e) => Err(e),
    }
}

/// Handles the `ResolveChoice` command: validates the choice against the
/// current scene, records the destination as the player's progress (best
/// effort), and returns the destination scene.
///
/// The progress write happens before the destination is loaded, so a broken
/// transition may still leave the player's save pointing at it.
///
/// # Errors
///
/// Returns `SceneNotFound` / `MalformedContent` if the current scene cannot
/// be loaded, `InvalidChoice` if the index is out of range, and
/// `BrokenTransition` if the destination scene cannot be loaded.
#[instrument(
    skip_all,
    fields(
        correlation_id = %command.correlation_id,
        user_id = %command.user_id,
        scene_id = %command.current_scene_id,
        choice_index = command.choice_index,
    )
)]
pub async fn handle_resolve_choice(
    command: &ResolveChoice,
    scenes: &dyn SceneRepository,
    progress: &dyn ProgressRepository,
) -> Result<ChoiceResolution, DomainError> {
    let current = scenes.load_scene(&command.current_scene_id).await?;
    let (position, choice) = select_choice(&current, command.choice_index)?;
    let next_scene_id = choice.next_scene.clone();

    debug!(
        correlation_id = %command.correlation_id(),
        command = command.command_type(),
        from = %current.id,
        to = %next_scene_id,
        "choice resolved"
    );

    let persisted = persist_progress(
        &command.user_id,
        &SaveState::at(next_scene_id.clone()),
        Durability::BestEffort,
        progress,
    )
    .await?;

    let next_scene = scenes.load_scene(&next_scene_id).await.map_err(|e| {
        error!(
            correlation_id = %command.correlation_id(),
            from = %current.id,
            choice = position,
            to = %next_scene_id,
            error = %e,
            "choice leads to a scene that cannot be loaded"
        );
        DomainError::BrokenTransition {
            from: current.id.clone(),
            choice: position,
            to: next_scene_id.clone(),
            reason: e.to_string(),
        }
    })?;

    Ok(ChoiceResolution {
        next_scene,
        persisted,
    })
}

/// Handles the `SaveProgress` command: a required, fully overwriting write.
///
/// # Errors
///
/// Returns `Validation` if the state names no scene, otherwise any
/// repository error.
#[instrument(
    skip_all,
    fields(correlation_id = %command.correlation_id, user_id = %command.user_id)
)]
pub async fn handle_save_progress(
    command: &SaveProgress,
    repo: &dyn ProgressRepository,
) -> Result<(), DomainError> {
    if command.state.current_scene_id.as_str().is_empty() {
        return Err(DomainError::Validation(
            "current_scene_id must not be empty".to_owned(),
        ));
    }

    persist_progress(&command.user_id, &command.state, Durability::Required, repo).await?;

    info!(
        correlation_id = %command.correlation_id(),
        user_id = %command.user_id,
        scene_id = %command.state.current_scene_id,
        "progress saved"
    );
    Ok(())
}

/// Handles the `DeleteProgress` command.
///
/// # Errors
///
/// Returns `NoSaveState` if the user has nothing saved, `Persistence` on I/O
/// failure.
#[instrument(
    skip_all,
    fields(correlation_id = %command.correlation_id, user_id = %command.user_id)
)]
pub async fn handle_delete_progress(
    command: &DeleteProgress,
    repo: &dyn ProgressRepository,
) -> Result<(), DomainError> {
    repo.delete_progress(&command.user_id).await?;

    info!(
        correlation_id = %command.correlation_id(),
        user_id = %command.user_id,
        "progress deleted"
    );
    Ok(())
}
