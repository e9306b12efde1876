//! Scene content model.
//!
//! Scenes are authored out of band as JSON documents and are never mutated by
//! the backend. The serialized shape is the wire format served to clients.

use serde::{Deserialize, Serialize};

use crate::ids::SceneId;

/// One narrative beat: background, characters, dialogue and outgoing choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique scene identifier.
    pub id: SceneId,
    /// Background asset reference.
    pub background: String,
    /// Characters present when the scene opens.
    #[serde(default)]
    pub characters: Vec<Character>,
    /// Dialogue and stage directions, in order.
    #[serde(default)]
    pub dialogue: Vec<DialogueLine>,
    /// Outgoing choices. Position is the client-facing choice index.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Returns `true` if the scene has no outgoing choices (an ending).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }
}

/// A labeled edge to another scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Text shown to the player.
    pub text: String,
    /// The scene this choice leads to.
    pub next_scene: SceneId,
}

/// A character on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name; also used by directives to address the character.
    pub name: String,
    /// Sprite asset reference.
    pub sprite: String,
    /// Screen position tag (e.g. `left`, `center`, `right`).
    pub position: String,
}

/// A line of dialogue: either spoken text or a stage direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DialogueLine {
    /// A stage direction such as `change_sprite`. Any line carrying `command`.
    Directive(Directive),
    /// A spoken line.
    Spoken(SpokenLine),
}

/// A spoken line of dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenLine {
    /// Who speaks. Absent for narration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    /// What is said. Omitted for lines that only name a speaker.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

/// A stage direction interpreted by the client.
///
/// Known commands are `add_character` (inline `character`), `change_sprite`
/// (`character` by name plus `sprite`) and `remove_character`
/// (`character_name`). Other commands are passed through untouched, including
/// any `speaker` or `text` they carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// Command name.
    pub command: String,
    /// Speaker attached to the direction, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    /// Text attached to the direction, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Character the command applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<CharacterRef>,
    /// Character addressed by name only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_name: Option<String>,
    /// Sprite asset reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
}

/// Reference to a character from a directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharacterRef {
    /// By display name.
    Name(String),
    /// A full character definition.
    Inline(Character),
    /// Any other shape, kept as authored.
    Raw(serde_json::Value),
}
