//! Tendertale — Scene Store.
//!
//! Read-only lookup of authored scene documents stored as one JSON file per
//! scene under a content root.

pub mod fs_scene_repository;

pub use fs_scene_repository::FsSceneRepository;
