//! Dispatch service
//!
//! Translates submission records into verdict messages and forwards them to
//! the messaging endpoint. Delivery is best-effort: a failed send is logged and
//! counted, and the remaining records of the batch are still attempted. There
//! are no retries and no acknowledgment tracking.

use async_trait::async_trait;
use homework_client::{ClientError, Result};
use homework_core::domain::homework::SubmissionRecord;
use homework_core::domain::verdict::Verdict;
use std::sync::Arc;
use tracing::{error, info};

use crate::repository::MessageRepository;

/// Counters for one dispatched batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Messages the endpoint accepted
    pub delivered: usize,
    /// Messages whose delivery failed
    pub failed: usize,
    /// Records that produced a diagnostic instead of a verdict
    pub diagnostics: usize,
}

/// Service trait for message delivery
#[async_trait]
pub trait DispatchService: Send + Sync {
    /// Forwards one message verbatim
    ///
    /// Empty messages are refused without contacting the endpoint.
    async fn dispatch(&self, message: &str) -> Result<()>;

    /// Translates and forwards every record, strictly in the given order
    async fn dispatch_batch(&self, records: &[SubmissionRecord]) -> DispatchReport;
}

/// Standard implementation of DispatchService
pub struct StandardDispatchService {
    messages: Arc<dyn MessageRepository>,
}

impl StandardDispatchService {
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl DispatchService for StandardDispatchService {
    async fn dispatch(&self, message: &str) -> Result<()> {
        if message.is_empty() {
            error!("Refusing to send an empty message");
            return Err(ClientError::InvalidRequest(
                "message text is empty".to_string(),
            ));
        }

        self.messages.send(message).await
    }

    async fn dispatch_batch(&self, records: &[SubmissionRecord]) -> DispatchReport {
        let mut report = DispatchReport::default();
        let chat_id = self.messages.chat_id();

        for record in records {
            let verdict = Verdict::from_record(record);
            if verdict.is_diagnostic() {
                report.diagnostics += 1;
                error!(?record, "{}", verdict);
            }

            let message = verdict.to_string();
            info!("Sending message {:?} to chat #{}", message, chat_id);

            match self.dispatch(&message).await {
                Ok(()) => {
                    report.delivered += 1;
                    info!("Finished sending message to chat #{}", chat_id);
                }
                Err(e) => {
                    report.failed += 1;
                    error!("Failed to send message to chat #{}: {}", chat_id, e);
                }
            }
        }

        report
    }
}
