//! Tendertale — chat-bot front end.
//!
//! A long-polling Telegram bot that answers `/start`, `/help` and free text
//! with a button opening the web experience. It never touches the narrative
//! engine; the only shared surface is the frontend URL.

pub mod error;
pub mod responder;
pub mod runner;
pub mod telegram;
pub mod transport;

pub use error::BotError;
pub use responder::{OutgoingMessage, ParseMode, Responder, UrlButton};
pub use runner::Bot;
pub use telegram::TelegramTransport;
pub use transport::{ChatTransport, IncomingMessage, Update};
