//! Review API DTOs

use serde::{Deserialize, Serialize};

use crate::domain::cursor::{Cursor, lenient_cursor};
use crate::domain::homework::{FetchResult, SubmissionRecord, lenient_records};

/// Body of `GET homework_statuses/?from_date=<cursor>`
///
/// Both keys are optional in practice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeworkStatuses {
    #[serde(default, deserialize_with = "lenient_records")]
    pub homeworks: Option<Vec<SubmissionRecord>>,
    #[serde(default, deserialize_with = "lenient_cursor")]
    pub current_date: Option<Cursor>,
}

impl HomeworkStatuses {
    /// Whether the response carried a `homeworks` list at all
    pub fn has_homeworks(&self) -> bool {
        self.homeworks.is_some()
    }
}

impl From<HomeworkStatuses> for FetchResult {
    /// A missing list is read as "no new work"
    fn from(statuses: HomeworkStatuses) -> Self {
        Self {
            records: statuses.homeworks.unwrap_or_default(),
            cursor: statuses.current_date,
        }
    }
}
