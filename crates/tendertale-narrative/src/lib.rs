//! Tendertale — Narrative Engine.
//!
//! Responsible for choice validation, scene transitions and the progress
//! writes that accompany them.

pub mod application;
pub mod domain;
