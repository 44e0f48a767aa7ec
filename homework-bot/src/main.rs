//! Homework Bot
//!
//! A long-lived worker that watches a student's homework submissions and
//! reports review verdicts to a Telegram chat.
//!
//! Architecture:
//! - Configuration: secrets and tunables from the environment
//! - Repositories: HTTP communication with the review API and Telegram
//! - Services: verdict translation and message delivery
//! - Scheduler: the polling loop that owns the cursor
//!
//! The bot polls the review API every twenty minutes for status changes made
//! since the last poll and sends one message per change. Failed cycles are
//! reported to the chat and retried after a short delay.

mod config;
mod repository;
mod scheduler;
mod service;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use homework_client::{PraktikumClient, TelegramClient};
use homework_core::domain::cursor::Cursor;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{
    HttpStatusRepository, MessageRepository, StatusRepository, TelegramMessageRepository,
};
use crate::scheduler::StatusPoller;
use crate::service::{DispatchService, StandardDispatchService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=debug,homework_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting homework bot");

    // Load configuration
    let config = load_config()?;
    info!(
        "Loaded configuration: chat_id={}, statuses_url={}",
        config.chat_id, config.statuses_url
    );

    // One HTTP client with a bounded timeout for both APIs
    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let statuses: Arc<dyn StatusRepository> = Arc::new(HttpStatusRepository::new(
        PraktikumClient::with_client(
            config.statuses_url.clone(),
            config.praktikum_token.clone(),
            http_client.clone(),
        ),
    ));
    let messages: Arc<dyn MessageRepository> = Arc::new(TelegramMessageRepository::new(
        TelegramClient::with_client(
            config.telegram_url.clone(),
            config.telegram_token.clone(),
            http_client,
        ),
        config.chat_id.clone(),
    ));
    let dispatcher: Arc<dyn DispatchService> = Arc::new(StandardDispatchService::new(messages));

    info!("Clients initialized");

    // Only submissions changed after startup count as new
    let mut poller = StatusPoller::new(&config, statuses, dispatcher, Cursor::now());

    tokio::select! {
        _ = poller.run() => {}
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for shutdown signal")?;
            info!("Shutdown signal received");
        }
    }

    info!("Homework bot stopped at cursor {}", poller.cursor());
    Ok(())
}

/// Loads and validates configuration from the environment
///
/// A missing secret is fatal: the bot does not start without all three.
fn load_config() -> Result<Config> {
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
