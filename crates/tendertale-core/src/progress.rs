//! Player progress model.

use serde::{Deserialize, Serialize};

use crate::ids::SceneId;

/// A user's single durable pointer to their current scene.
///
/// Always written as a whole; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveState {
    /// The scene the user is at, or about to enter.
    #[serde(alias = "CurrentSceneID")]
    pub current_scene_id: SceneId,
}

impl SaveState {
    /// Creates a save state pointing at `scene_id`.
    #[must_use]
    pub fn at(scene_id: SceneId) -> Self {
        Self {
            current_scene_id: scene_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_snake_case_key() {
        let state = SaveState::at(SceneId::from("chapter1"));
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({ "current_scene_id": "chapter1" })
        );
    }

    #[test]
    fn test_accepts_web_client_key_alias() {
        let state: SaveState =
            serde_json::from_str(r#"{ "CurrentSceneID": "chapter2" }"#).unwrap();
        assert_eq!(state.current_scene_id.as_str(), "chapter2");
    }
}
