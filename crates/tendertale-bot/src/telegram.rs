//! Telegram Bot API transport.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::BotError;
use crate::responder::{OutgoingMessage, ParseMode};
use crate::transport::{ChatTransport, Update};

const API_BASE: &str = "https://api.telegram.org";

/// Long-poll timeout passed to `getUpdates`, in seconds.
const POLL_TIMEOUT_SECS: u64 = 60;

/// HTTP timeout; must outlast the long poll.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(POLL_TIMEOUT_SECS + 30);

/// Envelope of every Bot API response.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

/// Talks to the Telegram Bot API over HTTPS.
#[derive(Debug, Clone)]
pub struct TelegramTransport {
    client: reqwest::Client,
    base_url: String,
}

impl TelegramTransport {
    /// Creates a transport for the bot identified by `token`.
    ///
    /// # Errors
    ///
    /// Returns `BotError::Request` if the HTTP client cannot be built.
    pub fn new(token: &str) -> Result<Self, BotError> {
        Self::with_api_base(API_BASE, token)
    }

    /// Creates a transport against a custom API host.
    ///
    /// # Errors
    ///
    /// Returns `BotError::Request` if the HTTP client cannot be built.
    pub fn with_api_base(api_base: &str, token: &str) -> Result<Self, BotError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: format!("{}/bot{token}", api_base.trim_end_matches('/')),
        })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, body: &Value) -> Result<T, BotError> {
        let response: ApiResponse<T> = self
            .client
            .post(format!("{}/{method}", self.base_url))
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        match response {
            ApiResponse {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            ApiResponse { description, .. } => Err(BotError::Api(
                description.unwrap_or_else(|| format!("{method} failed without description")),
            )),
        }
    }
}

/// Builds the `sendMessage` request body.
fn send_message_body(chat_id: i64, message: &OutgoingMessage) -> Value {
    let mut body = json!({
        "chat_id": chat_id,
        "text": message.text,
    });
    if let Some(ParseMode::Markdown) = message.parse_mode {
        body["parse_mode"] = json!("Markdown");
    }
    if let Some(button) = &message.button {
        body["reply_markup"] = json!({
            "inline_keyboard": [[{ "text": button.label, "url": button.url }]]
        });
    }
    body
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn poll_updates(&self, offset: i64) -> Result<Vec<Update>, BotError> {
        self.call(
            "getUpdates",
            &json!({
                "offset": offset,
                "timeout": POLL_TIMEOUT_SECS,
                "allowed_updates": ["message"],
            }),
        )
        .await
    }

    async fn send_message(
        &self,
        chat_id: i64,
        message: &OutgoingMessage,
    ) -> Result<(), BotError> {
        self.call::<Value>("sendMessage", &send_message_body(chat_id, message))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::Responder;

    #[test]
    fn test_new_builds_method_urls_from_token() {
        let transport = TelegramTransport::with_api_base("https://bots.example/", "123:abc").unwrap();
        assert_eq!(transport.base_url, "https://bots.example/bot123:abc");
    }

    #[test]
    fn test_play_button_becomes_inline_keyboard() {
        let replies = Responder::new("https://play.example.com").respond("hi");

        let body = send_message_body(7, &replies[0]);

        assert_eq!(body["chat_id"], 7);
        assert!(body.get("parse_mode").is_none());
        assert_eq!(
            body["reply_markup"]["inline_keyboard"][0][0]["url"],
            "https://play.example.com"
        );
    }

    #[test]
    fn test_markdown_text_sets_parse_mode() {
        let replies = Responder::new("https://play.example.com").respond("/help");

        let body = send_message_body(7, &replies[0]);

        assert_eq!(body["parse_mode"], "Markdown");
        assert!(body.get("reply_markup").is_none());
    }

    #[test]
    fn test_api_error_envelope_decodes_description() {
        let raw = r#"{ "ok": false, "error_code": 401, "description": "Unauthorized" }"#;

        let response: ApiResponse<Vec<Update>> = serde_json::from_str(raw).unwrap();

        assert!(!response.ok);
        assert!(response.result.is_none());
        assert_eq!(response.description.as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn test_updates_decode_with_and_without_text() {
        let raw = r#"{ "ok": true, "result": [
            { "update_id": 10, "message": { "chat": { "id": 5 }, "text": "/start" } },
            { "update_id": 11, "message": { "chat": { "id": 5 } } },
            { "update_id": 12, "edited_message": {} }
        ] }"#;

        let response: ApiResponse<Vec<Update>> = serde_json::from_str(raw).unwrap();
        let updates = response.result.unwrap();

        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0].message.as_ref().unwrap().text.as_deref(), Some("/start"));
        assert!(updates[1].message.as_ref().unwrap().text.is_none());
        assert!(updates[2].message.is_none());
    }
}
