//! Tendertale — Progress Store.
//!
//! Persists exactly one save state per user as a JSON file named after the
//! user identifier. Every write is a full overwrite.

pub mod fs_progress_repository;

pub use fs_progress_repository::FsProgressRepository;
