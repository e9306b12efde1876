//! Application layer: command and query handlers over the repositories.

pub mod command_handlers;
pub mod query_handlers;
