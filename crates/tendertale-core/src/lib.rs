//! Tendertale Core — shared domain abstractions.
//!
//! This crate defines the scene and progress data model, identifier
//! sanitization, the domain error taxonomy and the repository traits that the
//! stores implement. It contains no infrastructure code.

pub mod command;
pub mod error;
pub mod ids;
pub mod progress;
pub mod repository;
pub mod scene;
