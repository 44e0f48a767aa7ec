//! Homework HTTP Clients
//!
//! Small, type-safe HTTP clients for the two services the homework bot talks to:
//! - [`PraktikumClient`]: the homework review API (status changes since a cursor)
//! - [`TelegramClient`]: the Telegram Bot API (`sendMessage`)
//!
//! Both share one error type, [`ClientError`]. Neither client retries; retrying
//! is the caller's job.
//!
//! # Example
//!
//! ```no_run
//! use homework_client::PraktikumClient;
//! use homework_core::domain::cursor::Cursor;
//!
//! #[tokio::main]
//! async fn main() -> homework_client::Result<()> {
//!     let client = PraktikumClient::new(
//!         "https://praktikum.yandex.ru/api/user_api/homework_statuses/",
//!         "token",
//!     );
//!
//!     let page = client.homework_statuses(Cursor::EPOCH).await?;
//!     println!("{} status change(s)", page.records.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod statuses;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use telegram::TelegramClient;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the homework review API
#[derive(Clone)]
pub struct PraktikumClient {
    /// Full URL of the statuses endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PraktikumClient {
    /// Create a new review API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework statuses endpoint
    /// * `token` - OAuth token of the student
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new review API client with a custom HTTP client
    ///
    /// This is where the request timeout is configured.
    ///
    /// # Example
    /// ```
    /// use homework_client::PraktikumClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PraktikumClient::with_client("http://localhost:8080/statuses/", "token", http_client);
    /// ```
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the statuses endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for PraktikumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PraktikumClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Response Handlers
// =============================================================================

/// Handle an API response and deserialize JSON
///
/// Non-2xx statuses become [`ClientError::ApiError`] carrying the body text;
/// bodies that are not the expected JSON become [`ClientError::ParseError`].
pub(crate) async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body)
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}
