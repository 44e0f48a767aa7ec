//! In-memory fakes of the repositories

use async_trait::async_trait;
use homework_client::{ClientError, Result};
use homework_core::domain::cursor::Cursor;
use homework_core::domain::homework::FetchResult;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::repository::{MessageRepository, StatusRepository};

/// Records every message; fails the attempts whose index is listed
pub struct RecordingMessages {
    sent: Mutex<Vec<String>>,
    attempts: Mutex<usize>,
    fail_on: Vec<usize>,
    fail_all: bool,
}

impl RecordingMessages {
    pub fn new() -> Self {
        Self::failing_on(&[])
    }

    pub fn failing_on(attempts: &[usize]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            attempts: Mutex::new(0),
            fail_on: attempts.to_vec(),
            fail_all: false,
        }
    }

    pub fn always_failing() -> Self {
        Self {
            fail_all: true,
            ..Self::new()
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl MessageRepository for RecordingMessages {
    async fn send(&self, text: &str) -> Result<()> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts - 1
        };

        if self.fail_all || self.fail_on.contains(&attempt) {
            return Err(ClientError::api_error(502, "telegram unavailable"));
        }

        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn chat_id(&self) -> &str {
        "42"
    }
}

/// What a scripted fetch does
pub enum Step {
    Reply(Result<FetchResult>),
    Panic,
}

/// Replays scripted fetch outcomes and records the cursors it was asked for
pub struct ScriptedStatuses {
    steps: Mutex<VecDeque<Step>>,
    requested: Mutex<Vec<Cursor>>,
}

impl ScriptedStatuses {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into_iter().collect()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<Cursor> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusRepository for ScriptedStatuses {
    async fn fetch(&self, from: Cursor) -> Result<FetchResult> {
        self.requested.lock().unwrap().push(from);
        let step = self.steps.lock().unwrap().pop_front();

        match step {
            Some(Step::Reply(result)) => result,
            Some(Step::Panic) => panic!("scripted fetch panicked"),
            None => Ok(FetchResult::default()),
        }
    }
}
