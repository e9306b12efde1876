//! Messaging backend abstraction.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::BotError;
use crate::responder::OutgoingMessage;

/// An incoming update from the messaging backend.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// Monotonic update identifier used to acknowledge updates.
    pub update_id: i64,
    /// The message, if this update carries one.
    #[serde(default)]
    pub message: Option<IncomingMessage>,
}

/// A chat message sent to the bot.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    /// The chat the message came from.
    pub chat: Chat,
    /// Message text. Absent for stickers, photos and the like.
    #[serde(default)]
    pub text: Option<String>,
}

/// Chat reference.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Chat {
    /// Chat identifier.
    pub id: i64,
}

/// A messaging backend the bot can poll and reply through.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Fetch updates with `update_id >= offset`, waiting up to the backend's
    /// long-poll timeout.
    async fn poll_updates(&self, offset: i64) -> Result<Vec<Update>, BotError>;

    /// Send a message to `chat_id`.
    async fn send_message(&self, chat_id: i64, message: &OutgoingMessage)
    -> Result<(), BotError>;
}
