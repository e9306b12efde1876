//! Command replies. Pure: no I/O, no backend types.

const WELCOME_TEXT: &str = "🎮 Welcome to Tendertale Visual Novel!

This is a Telegram Web App - a mini webapp that runs directly in Telegram.

Click the button below to open the visual novel in Telegram!";

const HELP_TEXT: &str = "📖 Available Commands:

/start - Start the visual novel web app
/help - Show this help message

The visual novel runs as a web app directly in Telegram!";

const UNKNOWN_COMMAND_TEXT: &str = "Unknown command. Use /help to see available commands.";

const PLAY_PROMPT_TEXT: &str = "Click the button below to open the visual novel in your browser!";

const PLAY_BUTTON_LABEL: &str = "🎮 Play Visual Novel";

/// Text formatting requested for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Legacy Telegram Markdown.
    Markdown,
}

/// An inline button opening a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlButton {
    /// Button label.
    pub label: String,
    /// Target URL.
    pub url: String,
}

/// A message the bot sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// Message text.
    pub text: String,
    /// Formatting, if any.
    pub parse_mode: Option<ParseMode>,
    /// Inline button, if any.
    pub button: Option<UrlButton>,
}

impl OutgoingMessage {
    fn markdown(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            parse_mode: Some(ParseMode::Markdown),
            button: None,
        }
    }
}

/// Maps incoming text to the replies the bot sends.
#[derive(Debug, Clone)]
pub struct Responder {
    play_url: String,
}

impl Responder {
    /// Creates a responder whose play button opens `play_url`.
    #[must_use]
    pub fn new(play_url: impl Into<String>) -> Self {
        Self {
            play_url: play_url.into(),
        }
    }

    /// The URL the play button opens.
    #[must_use]
    pub fn play_url(&self) -> &str {
        &self.play_url
    }

    /// Replies to a message, in send order.
    ///
    /// Commands are matched on their first word with any `@botname` suffix
    /// removed. Anything that is not a command gets the play button.
    #[must_use]
    pub fn respond(&self, text: &str) -> Vec<OutgoingMessage> {
        let Some(command) = text.trim_start().strip_prefix('/') else {
            return vec![self.play_button()];
        };
        let command = command
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .split('@')
            .next()
            .unwrap_or_default();

        match command {
            "start" => vec![OutgoingMessage::markdown(WELCOME_TEXT), self.play_button()],
            "help" => vec![OutgoingMessage::markdown(HELP_TEXT)],
            _ => vec![OutgoingMessage::markdown(UNKNOWN_COMMAND_TEXT)],
        }
    }

    fn play_button(&self) -> OutgoingMessage {
        OutgoingMessage {
            text: PLAY_PROMPT_TEXT.to_owned(),
            parse_mode: None,
            button: Some(UrlButton {
                label: PLAY_BUTTON_LABEL.to_owned(),
                url: self.play_url.clone(),
            }),
        }
    }
}
