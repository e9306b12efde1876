//! Long-polling loop.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::BotError;
use crate::responder::Responder;
use crate::transport::{ChatTransport, Update};

/// Delay before polling again after a failed poll.
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// A chat bot bound to one transport.
#[derive(Debug)]
pub struct Bot<T> {
    transport: T,
    responder: Responder,
    retry_delay: Duration,
}

impl<T: ChatTransport> Bot<T> {
    /// Creates a bot replying through `transport`.
    #[must_use]
    pub fn new(transport: T, responder: Responder) -> Self {
        Self {
            transport,
            responder,
            retry_delay: RETRY_DELAY,
        }
    }

    /// Polls and answers messages until the process exits.
    pub async fn run(&self) {
        info!(play_url = self.responder.play_url(), "chat bot started");
        let mut offset = 0;
        loop {
            match self.poll_once(offset).await {
                Ok(next) => offset = next,
                Err(e) => {
                    warn!(error = %e, "polling for updates failed, retrying");
                    tokio::time::sleep(self.retry_delay).await;
                }
            }
        }
    }

    /// Fetches one batch of updates, answers them and returns the offset that
    /// acknowledges the batch.
    ///
    /// # Errors
    ///
    /// Returns `BotError` if polling fails. Send failures are logged only.
    pub async fn poll_once(&self, offset: i64) -> Result<i64, BotError> {
        let updates = self.transport.poll_updates(offset).await?;
        let mut next = offset;
        for update in &updates {
            next = next.max(update.update_id + 1);
            self.handle_update(update).await;
        }
        Ok(next)
    }

    /// Answers a single update. Returns the number of messages delivered.
    pub async fn handle_update(&self, update: &Update) -> usize {
        let Some(message) = &update.message else {
            debug!(update_id = update.update_id, "ignoring update without message");
            return 0;
        };
        let text = message.text.as_deref().unwrap_or_default();

        let mut delivered = 0;
        for reply in self.responder.respond(text) {
            match self.transport.send_message(message.chat.id, &reply).await {
                Ok(()) => delivered += 1,
                Err(e) => warn!(chat_id = message.chat.id, error = %e, "failed to send reply"),
            }
        }
        delivered
    }
}
