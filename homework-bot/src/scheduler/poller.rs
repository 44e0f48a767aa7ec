//! Status poller
//!
//! Polls the review API for status changes and forwards a verdict for each
//! one. A cycle is fetch, dispatch oldest-first, advance the cursor. After a
//! successful cycle the poller sleeps for the poll interval; after a failed one
//! it reports the error to the chat and sleeps for the shorter retry delay.
//!
//! The cursor only moves at the end of a successful cycle, so a cycle that
//! fails part-way is replayed in full next time.

use futures::FutureExt;
use homework_client::ClientError;
use homework_core::domain::cursor::Cursor;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::repository::StatusRepository;
use crate::service::{DispatchReport, DispatchService};

/// Why a cycle did not complete
#[derive(Debug, Error)]
pub enum CycleError {
    /// The status request failed or returned something unreadable
    #[error("failed to fetch homework statuses: {0}")]
    Fetch(#[source] ClientError),

    /// Anything unexpected, including bugs
    #[error("poll cycle panicked: {0}")]
    Panicked(String),
}

/// Summary of one completed cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Records returned by the fetch
    pub fetched: usize,
    /// Messages the endpoint accepted
    pub delivered: usize,
    /// Messages whose delivery failed
    pub failed: usize,
    /// Records that produced a diagnostic
    pub diagnostics: usize,
    /// Cursor after the cycle
    pub cursor: Cursor,
}

/// Polling loop that owns the cursor
pub struct StatusPoller {
    statuses: Arc<dyn StatusRepository>,
    dispatcher: Arc<dyn DispatchService>,
    cursor: Cursor,
    poll_interval: Duration,
    retry_delay: Duration,
}

impl StatusPoller {
    /// Creates a poller starting from `cursor`
    ///
    /// The bot starts at [`Cursor::now`] so that history from before startup is
    /// not replayed.
    pub fn new(
        config: &Config,
        statuses: Arc<dyn StatusRepository>,
        dispatcher: Arc<dyn DispatchService>,
        cursor: Cursor,
    ) -> Self {
        Self {
            statuses,
            dispatcher,
            cursor,
            poll_interval: config.poll_interval,
            retry_delay: config.retry_delay,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Starts the polling loop
    ///
    /// Never returns; stop it by dropping the future.
    pub async fn run(&mut self) {
        info!(
            "Starting status poller (interval: {:?}, retry delay: {:?}, cursor: {})",
            self.poll_interval, self.retry_delay, self.cursor
        );

        loop {
            let delay = self.tick().await;
            debug!("Sleeping for {:?}", delay);
            tokio::time::sleep(delay).await;
        }
    }

    /// Runs one cycle, recovering from failure, and returns how long to sleep
    pub async fn tick(&mut self) -> Duration {
        match self.run_cycle().await {
            Ok(report) => {
                if report.fetched > 0 {
                    info!(
                        fetched = report.fetched,
                        delivered = report.delivered,
                        failed = report.failed,
                        diagnostics = report.diagnostics,
                        cursor = %report.cursor,
                        "Poll cycle complete"
                    );
                }
                self.poll_interval
            }
            Err(e) => {
                self.recover(&e).await;
                self.retry_delay
            }
        }
    }

    /// Performs a single poll cycle
    ///
    /// Panics inside the cycle are caught and returned as
    /// [`CycleError::Panicked`]. The cursor is left untouched on any error.
    pub async fn run_cycle(&mut self) -> Result<CycleReport, CycleError> {
        debug!("Starting poll cycle from cursor {}", self.cursor);

        let outcome = AssertUnwindSafe(self.process(self.cursor))
            .catch_unwind()
            .await;
        let (mut report, next) = match outcome {
            Ok(result) => result?,
            Err(panic) => return Err(CycleError::Panicked(panic_message(panic))),
        };

        if let Some(next) = next {
            if !self.cursor.advance(Some(next)) && next < self.cursor {
                warn!(
                    "Review API returned cursor {} older than {}, keeping the current one",
                    next, self.cursor
                );
            }
        }
        report.cursor = self.cursor;

        debug!("Finished poll cycle, cursor is {}", self.cursor);
        Ok(report)
    }

    /// Fetches and dispatches one batch without touching the cursor
    async fn process(&self, from: Cursor) -> Result<(CycleReport, Option<Cursor>), CycleError> {
        let page = self
            .statuses
            .fetch(from)
            .await
            .map_err(CycleError::Fetch)?;

        let fetched = page.records.len();
        if fetched == 0 {
            debug!("No status changes since {}", from);
        }

        // The API returns newest first
        let mut records = page.records;
        records.reverse();

        let dispatch: DispatchReport = self.dispatcher.dispatch_batch(&records).await;

        let report = CycleReport {
            fetched,
            delivered: dispatch.delivered,
            failed: dispatch.failed,
            diagnostics: dispatch.diagnostics,
            cursor: from,
        };
        Ok((report, page.cursor))
    }

    /// Logs a failed cycle and reports it to the chat, best-effort
    async fn recover(&self, err: &CycleError) {
        error!(error = ?err, "Bot encountered an error: {}", err);

        let message = format!("Bot encountered an error: {}", err);
        if let Err(e) = self.dispatcher.dispatch(&message).await {
            warn!("Failed to report error to chat: {}", e);
        }
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
