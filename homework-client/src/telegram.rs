//! Telegram Bot API client

use homework_core::dto::telegram::{SendMessage, SentMessage, TelegramResponse};
use reqwest::Client;
use tracing::debug;

use crate::error::{ClientError, Result};

/// HTTP client for the Telegram Bot API
///
/// The bot token is part of every request path, so it is never logged.
#[derive(Clone)]
pub struct TelegramClient {
    base_url: String,
    token: String,
    client: Client,
}

impl TelegramClient {
    /// Create a client with a base URL and HTTP client
    ///
    /// # Arguments
    /// * `base_url` - Bot API host (e.g., "https://api.telegram.org")
    /// * `token` - Bot token issued by BotFather
    /// * `client` - A configured reqwest Client
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the Bot API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Numeric chat id or `@channel` username
    /// * `text` - Message text, sent verbatim
    ///
    /// # Returns
    /// The id Telegram assigned to the message
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<i64> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        debug!(chat_id, "Sending Telegram message");

        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id: chat_id.to_string(),
                text: text.to_string(),
            })
            .send()
            .await
            .map_err(|e| ClientError::from(e).without_url())?;

        let reply: TelegramResponse<SentMessage> = crate::handle_response(response)
            .await
            .map_err(ClientError::without_url)?;
        if !reply.ok {
            return Err(ClientError::api_error(
                200,
                reply
                    .description
                    .unwrap_or_else(|| "Telegram rejected the message".to_string()),
            ));
        }

        reply
            .result
            .map(|message| message.message_id)
            .ok_or_else(|| ClientError::ParseError("sendMessage reply has no result".to_string()))
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
