//! Bot configuration
//!
//! Defines the secrets and tunables of the bot: API tokens, the destination
//! chat, endpoint URLs, the polling cadence and the request timeout.

use std::time::Duration;

/// Review API statuses endpoint
pub const DEFAULT_STATUSES_URL: &str =
    "https://praktikum.yandex.ru/api/user_api/homework_statuses/";

/// Telegram Bot API host
pub const DEFAULT_TELEGRAM_URL: &str = "https://api.telegram.org";

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1200);
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(20);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Bot configuration
///
/// Secrets are kept out of the `Debug` output.
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub praktikum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat every message is sent to
    pub chat_id: String,

    /// Full URL of the review API statuses endpoint
    pub statuses_url: String,

    /// Telegram Bot API host
    pub telegram_url: String,

    /// Sleep between successful cycles
    pub poll_interval: Duration,

    /// Sleep after a failed cycle
    pub retry_delay: Duration,

    /// Upper bound on every HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(praktikum_token: String, telegram_token: String, chat_id: String) -> Self {
        Self {
            praktikum_token,
            telegram_token,
            chat_id,
            statuses_url: DEFAULT_STATUSES_URL.to_string(),
            telegram_url: DEFAULT_TELEGRAM_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            retry_delay: DEFAULT_RETRY_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRAKTIKUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRAKTIKUM_API_URL (optional)
    /// - TELEGRAM_API_URL (optional)
    /// - POLL_INTERVAL (optional, seconds, default: 1200)
    /// - RETRY_DELAY (optional, seconds, default: 20)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| anyhow::anyhow!("{} environment variable not set", key))
        };
        let seconds = |key: &str, default: Duration| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(default)
        };

        let mut config = Self::new(
            required("PRAKTIKUM_TOKEN")?,
            required("TELEGRAM_TOKEN")?,
            required("TELEGRAM_CHAT_ID")?,
        );

        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(url) = optional("PRAKTIKUM_API_URL") {
            config.statuses_url = url;
        }
        if let Some(url) = optional("TELEGRAM_API_URL") {
            config.telegram_url = url;
        }
        config.poll_interval = seconds("POLL_INTERVAL", DEFAULT_POLL_INTERVAL);
        config.retry_delay = seconds("RETRY_DELAY", DEFAULT_RETRY_DELAY);
        config.request_timeout = seconds("REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT);

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.praktikum_token.is_empty() {
            anyhow::bail!("praktikum_token cannot be empty");
        }

        if self.telegram_token.is_empty() {
            anyhow::bail!("telegram_token cannot be empty");
        }

        if self.chat_id.is_empty() {
            anyhow::bail!("chat_id cannot be empty");
        }

        for (name, url) in [
            ("statuses_url", &self.statuses_url),
            ("telegram_url", &self.telegram_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.retry_delay.is_zero() {
            anyhow::bail!("retry_delay must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("chat_id", &self.chat_id)
            .field("statuses_url", &self.statuses_url)
            .field("telegram_url", &self.telegram_url)
            .field("poll_interval", &self.poll_interval)
            .field("retry_delay", &self.retry_delay)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}
