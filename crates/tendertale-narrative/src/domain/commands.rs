//! Commands for the Narrative Engine.

use tendertale_core::command::Command;
use tendertale_core::ids::{SceneId, UserId};
use tendertale_core::progress::SaveState;
use uuid::Uuid;

/// Command to pick a choice in the current scene and move to the next one.
#[derive(Debug, Clone)]
pub struct ResolveChoice {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The player making the choice.
    pub user_id: UserId,
    /// The scene the choice is made in.
    pub current_scene_id: SceneId,
    /// Zero-based choice index. Signed so out-of-range client input is representable.
    pub choice_index: i64,
}

/// Command to overwrite a player's save state.
#[derive(Debug, Clone)]
pub struct SaveProgress {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The player whose progress is saved.
    pub user_id: UserId,
    /// The new save state.
    pub state: SaveState,
}

/// Command to remove a player's save state.
#[derive(Debug, Clone)]
pub struct DeleteProgress {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The player whose progress is removed.
    pub user_id: UserId,
}

impl Command for ResolveChoice {
    fn command_type(&self) -> &'static str {
        "narrative.resolve_choice"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

impl Command for SaveProgress {
    fn command_type(&self) -> &'static str {
        "narrative.save_progress"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

impl Command for DeleteProgress {
    fn command_type(&self) -> &'static str {
        "narrative.delete_progress"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
