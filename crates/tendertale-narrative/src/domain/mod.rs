//! Domain layer: commands and pure transition rules.

pub mod commands;
pub mod transition;
