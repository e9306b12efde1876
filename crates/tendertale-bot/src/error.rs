//! Chat-bot error types.

use thiserror::Error;

/// Errors talking to the messaging backend.
#[derive(Debug, Error)]
pub enum BotError {
    /// The HTTP request failed (network, DNS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered but rejected the call.
    #[error("bot API error: {0}")]
    Api(String),
}
