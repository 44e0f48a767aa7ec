//! Statuses repository
//!
//! Fetches homework status changes from the review API.

use async_trait::async_trait;
use homework_client::{PraktikumClient, Result};
use homework_core::domain::cursor::Cursor;
use homework_core::domain::homework::FetchResult;

/// Repository trait for reading status changes
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches status changes made since `from`
    ///
    /// Performs one bounded network call and never retries. Records are in
    /// API order (newest first).
    async fn fetch(&self, from: Cursor) -> Result<FetchResult>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: PraktikumClient,
}

impl HttpStatusRepository {
    pub fn new(client: PraktikumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch(&self, from: Cursor) -> Result<FetchResult> {
        self.client.homework_statuses(from).await
    }
}
