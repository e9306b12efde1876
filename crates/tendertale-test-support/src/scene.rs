//! Scene fixtures and an in-memory `SceneRepository`.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tendertale_core::error::DomainError;
use tendertale_core::ids::SceneId;
use tendertale_core::repository::SceneRepository;
use tendertale_core::scene::{Character, Choice, DialogueLine, Scene, SpokenLine};

/// Fluent builder for test scenes.
#[derive(Debug)]
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    /// Starts a scene with the given id, a default background and no content.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            scene: Scene {
                id: SceneId::from(id),
                background: format!("bg/{id}.png"),
                characters: Vec::new(),
                dialogue: Vec::new(),
                choices: Vec::new(),
            },
        }
    }

    /// Sets the background asset.
    #[must_use]
    pub fn background(mut self, background: &str) -> Self {
        background.clone_into(&mut self.scene.background);
        self
    }

    /// Adds a character.
    #[must_use]
    pub fn character(mut self, name: &str, position: &str) -> Self {
        self.scene.characters.push(Character {
            name: name.to_owned(),
            sprite: format!("{}.png", name.to_lowercase()),
            position: position.to_owned(),
        });
        self
    }

    /// Adds a spoken line.
    #[must_use]
    pub fn line(mut self, speaker: &str, text: &str) -> Self {
        self.scene.dialogue.push(DialogueLine::Spoken(SpokenLine {
            speaker: Some(speaker.to_owned()),
            text: text.to_owned(),
        }));
        self
    }

    /// Adds a choice leading to `next_scene`.
    #[must_use]
    pub fn choice(mut self, text: &str, next_scene: &str) -> Self {
        self.scene.choices.push(Choice {
            text: text.to_owned(),
            next_scene: SceneId::from(next_scene),
        });
        self
    }

    /// Finishes the scene.
    #[must_use]
    pub fn build(self) -> Scene {
        self.scene
    }
}

/// A scene repository holding scenes in memory and recording every lookup.
#[derive(Debug, Default)]
pub struct InMemorySceneRepository {
    scenes: HashMap<SceneId, Scene>,
    lookups: Mutex<Vec<SceneId>>,
}

impl InMemorySceneRepository {
    /// Creates a repository containing `scenes`.
    #[must_use]
    pub fn with_scenes(scenes: impl IntoIterator<Item = Scene>) -> Self {
        Self {
            scenes: scenes.into_iter().map(|s| (s.id.clone(), s)).collect(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Returns every scene id looked up so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn lookups(&self) -> Vec<SceneId> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl SceneRepository for InMemorySceneRepository {
    async fn load_scene(&self, scene_id: &SceneId) -> Result<Scene, DomainError> {
        self.lookups.lock().unwrap().push(scene_id.clone());
        self.scenes
            .get(scene_id)
            .cloned()
            .ok_or_else(|| DomainError::SceneNotFound(scene_id.clone()))
    }
}
