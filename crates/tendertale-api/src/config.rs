//! Server configuration read from the environment.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SCENES_DIR: &str = "scenes";
const DEFAULT_SAVES_DIR: &str = "saves";
const DEFAULT_PUBLIC_URL: &str = "http://localhost:8080";

/// Runtime configuration.
#[derive(Clone)]
pub struct Config {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory holding `<scene_id>.json` files.
    pub scenes_dir: PathBuf,
    /// Directory holding `<user_id>.json` save files.
    pub saves_dir: PathBuf,
    /// Deployed web client origin, if any.
    pub frontend_url: Option<String>,
    /// Public URL of this server; the bot's fallback link.
    pub public_url: String,
    /// Telegram bot token. The bot only runs when this is set.
    pub telegram_bot_token: Option<String>,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            scenes_dir: get("SCENES_DIR").map_or_else(|| DEFAULT_SCENES_DIR.into(), PathBuf::from),
            saves_dir: get("SAVES_DIR").map_or_else(|| DEFAULT_SAVES_DIR.into(), PathBuf::from),
            frontend_url: get("FRONTEND_URL"),
            public_url: get("PUBLIC_URL").unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_owned()),
            telegram_bot_token: get("TELEGRAM_BOT_TOKEN"),
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn listen_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Where the chat bot's play button points.
    #[must_use]
    pub fn play_url(&self) -> &str {
        self.frontend_url.as_deref().unwrap_or(&self.public_url)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("scenes_dir", &self.scenes_dir)
            .field("saves_dir", &self.saves_dir)
            .field("frontend_url", &self.frontend_url)
            .field("public_url", &self.public_url)
            .field(
                "telegram_bot_token",
                &self.telegram_bot_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.scenes_dir, PathBuf::from("scenes"));
        assert_eq!(config.saves_dir, PathBuf::from("saves"));
        assert!(config.frontend_url.is_none());
        assert!(config.telegram_bot_token.is_none());
        assert_eq!(config.listen_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.play_url(), "http://localhost:8080");
    }

    #[test]
    fn test_reads_overrides_and_ignores_empty_values() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("SCENES_DIR", "/srv/scenes"),
            ("FRONTEND_URL", "https://tendertale.vercel.app"),
            ("TELEGRAM_BOT_TOKEN", ""),
        ])
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.scenes_dir, PathBuf::from("/srv/scenes"));
        assert_eq!(config.play_url(), "https://tendertale.vercel.app");
        assert!(config.telegram_bot_token.is_none());
    }

    #[test]
    fn test_invalid_port_is_a_config_error() {
        let result = config_from(&[("PORT", "eighty")]);

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_debug_output_redacts_token() {
        let config = config_from(&[("TELEGRAM_BOT_TOKEN", "123:secret")]).unwrap();

        let rendered = format!("{config:?}");

        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
