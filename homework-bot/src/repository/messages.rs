//! Messages repository
//!
//! Delivers text messages to the one chat the bot reports to.

use async_trait::async_trait;
use homework_client::{Result, TelegramClient};

/// Repository trait for outgoing messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Sends `text` verbatim to the configured chat
    async fn send(&self, text: &str) -> Result<()>;

    /// Destination chat, for logging
    fn chat_id(&self) -> &str;
}

/// Telegram implementation of MessageRepository
pub struct TelegramMessageRepository {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramMessageRepository {
    /// Creates a repository bound to one chat
    ///
    /// # Arguments
    /// * `client` - Telegram client holding the bot token
    /// * `chat_id` - Destination chat, fixed for the lifetime of the process
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl MessageRepository for TelegramMessageRepository {
    async fn send(&self, text: &str) -> Result<()> {
        self.client.send_message(&self.chat_id, text).await?;
        Ok(())
    }

    fn chat_id(&self) -> &str {
        &self.chat_id
    }
}
