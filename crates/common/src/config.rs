use std::time::Duration;

use crate::error::ConfigError;

/// Default status endpoint polled for homework reviews.
pub const DEFAULT_STATUS_API_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Required environment variables, in the order they are reported when missing.
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Application configuration loaded once at startup from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OAuth token for the status API
    pub practicum_token: String,

    /// Telegram bot token used for delivery
    pub telegram_token: String,

    /// Telegram chat that receives every notification
    pub telegram_chat_id: String,

    /// Status endpoint URL
    pub status_api_endpoint: String,

    /// Telegram Bot API base URL (overridable for self-hosted bot servers)
    pub telegram_api_url: String,

    /// Pause between poll cycles in seconds (default: 600)
    pub poll_interval_secs: u64,

    /// Timeout applied to every outbound HTTP request in seconds (default: 30)
    pub http_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Every missing required variable is collected so the operator sees the
    /// full list in one error. Empty values are treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        Ok(Self {
            practicum_token: get("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: get("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: get("TELEGRAM_CHAT_ID").unwrap_or_default(),
            status_api_endpoint: get("STATUS_API_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_STATUS_API_ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            poll_interval_secs: parse_u64(get("POLL_INTERVAL_SECS"), "POLL_INTERVAL_SECS", 600)?,
            http_timeout_secs: parse_u64(get("HTTP_TIMEOUT_SECS"), "HTTP_TIMEOUT_SECS", 30)?,
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_u64(value: Option<String>, key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(key, format!("{raw:?} is not a valid u64"))),
    }
}
