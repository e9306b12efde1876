//! Choice validation and successor resolution.
//!
//! The scene graph is implicit: the only valid transitions out of a scene are
//! its own choices, addressed by zero-based position.

use tendertale_core::error::DomainError;
use tendertale_core::scene::{Choice, Scene};

/// Returns the choice at `index` together with its position.
///
/// # Errors
///
/// Returns `DomainError::InvalidChoice` unless `0 <= index < choices.len()`.
pub fn select_choice(scene: &Scene, index: i64) -> Result<(usize, &Choice), DomainError> {
    usize::try_from(index)
        .ok()
        .and_then(|position| scene.choices.get(position).map(|choice| (position, choice)))
        .ok_or_else(|| DomainError::InvalidChoice {
            scene_id: scene.id.clone(),
            index,
            available: scene.choices.len(),
        })
}

#[cfg(test)]
mod tests {
    use tendertale_core::error::DomainError;
    use tendertale_test_support::SceneBuilder;

    use super::select_choice;

    #[test]
    fn test_every_valid_index_selects_its_choice() {
        let scene = SceneBuilder::new("fork")
            .choice("Left", "left")
            .choice("Middle", "middle")
            .choice("Right", "right")
            .build();

        for (i, expected) in ["left", "middle", "right"].iter().enumerate() {
            let (position, choice) = select_choice(&scene, i64::try_from(i).unwrap()).unwrap();
            assert_eq!(position, i);
            assert_eq!(choice.next_scene.as_str(), *expected);
        }
    }

    #[test]
    fn test_bounds_are_exact_at_both_ends() {
        let scene = SceneBuilder::new("fork")
            .choice("Left", "left")
            .choice("Right", "right")
            .build();

        for index in [-1, 2, i64::MIN, i64::MAX] {
            match select_choice(&scene, index) {
                Err(DomainError::InvalidChoice {
                    index: got,
                    available,
                    ..
                }) => {
                    assert_eq!(got, index);
                    assert_eq!(available, 2);
                }
                other => panic!("index {index}: expected InvalidChoice, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_terminal_scene_has_no_valid_index() {
        let scene = SceneBuilder::new("ending").build();

        for index in [-1, 0, 1] {
            assert!(matches!(
                select_choice(&scene, index),
                Err(DomainError::InvalidChoice { .. })
            ));
        }
    }
}
