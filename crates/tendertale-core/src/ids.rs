//! Opaque identifiers and storage-key sanitization.
//!
//! Scene and user identifiers arrive from clients and from authored content.
//! They are treated as opaque tokens and only become file names after passing
//! [`is_storage_key`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum length in bytes of an identifier that may name a stored record.
pub const MAX_KEY_LEN: usize = 128;

/// Returns `true` if `raw` may be used as a file stem inside a storage root.
///
/// Accepted keys are non-empty, at most [`MAX_KEY_LEN`] bytes, consist only
/// of ASCII alphanumerics, `_`, `-` and `.`, do not start with `.` and never
/// contain `..`. Separators, drive prefixes and traversal sequences are
/// therefore impossible.
#[must_use]
pub fn is_storage_key(raw: &str) -> bool {
    !raw.is_empty()
        && raw.len() <= MAX_KEY_LEN
        && !raw.starts_with('.')
        && !raw.contains("..")
        && raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'))
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw identifier without validating it.
            #[must_use]
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Returns the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the identifier if it is safe to use as a file stem.
            #[must_use]
            pub fn storage_key(&self) -> Option<&str> {
                is_storage_key(&self.0).then_some(self.0.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

string_id!(
    /// Identifier of a scene; also its content file stem.
    SceneId
);

string_id!(
    /// Identifier of a player; also their save file stem.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifiers_are_storage_keys() {
        for raw in ["intro", "chapter1", "scene_2-b", "123456789", "v1.2"] {
            assert!(is_storage_key(raw), "{raw} should be accepted");
        }
    }

    #[test]
    fn test_traversal_and_separators_are_rejected() {
        for raw in [
            "",
            ".",
            "..",
            "../secrets",
            "..\\secrets",
            "a/../b",
            "a/b",
            "a\\b",
            "/etc/passwd",
            ".hidden",
            "a..b",
            "c:evil",
            "nul\0byte",
            "spaced name",
        ] {
            assert!(!is_storage_key(raw), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_overlong_identifier_is_rejected() {
        let raw = "a".repeat(MAX_KEY_LEN + 1);
        assert!(!is_storage_key(&raw));
        assert!(is_storage_key(&raw[..MAX_KEY_LEN]));
    }

    #[test]
    fn test_storage_key_returns_none_for_unsafe_id() {
        assert_eq!(SceneId::from("intro").storage_key(), Some("intro"));
        assert_eq!(SceneId::from("../intro").storage_key(), None);
        assert_eq!(UserId::from("42").storage_key(), Some("42"));
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = SceneId::from("intro");
        assert_eq!(serde_json::to_value(&id).unwrap(), "intro");
        let back: UserId = serde_json::from_str("\"u1\"").unwrap();
        assert_eq!(back.as_str(), "u1");
    }
}
