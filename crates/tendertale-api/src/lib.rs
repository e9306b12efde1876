//! Tendertale API — HTTP transport for the narrative engine.

pub mod app;
pub mod chat_bot;
pub mod config;
pub mod cors;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
