//! Chat bot startup.

use tendertale_bot::{Bot, Responder, TelegramTransport};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::Config;

/// Spawns the Telegram bot when a token is configured.
///
/// Returns `None` when no token is set or the client cannot be created; the
/// HTTP server runs either way.
pub fn spawn(config: &Config) -> Option<JoinHandle<()>> {
    let Some(token) = config.telegram_bot_token.as_deref() else {
        warn!("TELEGRAM_BOT_TOKEN not set, chat bot will not start");
        return None;
    };

    let transport = match TelegramTransport::new(token) {
        Ok(transport) => transport,
        Err(e) => {
            error!(error = %e, "failed to create chat bot client");
            return None;
        }
    };

    let bot = Bot::new(transport, Responder::new(config.play_url()));
    info!("starting chat bot");
    Some(tokio::spawn(async move { bot.run().await }))
}
