//! Review verdicts
//!
//! Turns a [`SubmissionRecord`] into the text sent to the user. Translation is
//! total: records with missing fields or an unknown status produce one of two
//! fixed diagnostics instead of a verdict.

use std::fmt;

use crate::domain::homework::{HomeworkStatus, SubmissionRecord};

/// Diagnostic sent when a record lacks its name or status
pub const MALFORMED_DATA: &str = "Invalid server response: homework data is missing.";

/// Diagnostic sent when a record carries a status outside the known set
pub const UNKNOWN_STATUS: &str =
    "The homework status in the server response is not one of the expected values. Check the API specification.";

/// Outcome of translating one submission record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The submission was reviewed with a known status
    Reviewed { name: String, status: HomeworkStatus },
    /// Name or status is missing
    MalformedData,
    /// Status is present but unrecognized
    UnknownStatus(String),
}

impl Verdict {
    pub fn from_record(record: &SubmissionRecord) -> Self {
        let (Some(name), Some(status)) = (&record.homework_name, &record.status) else {
            return Self::MalformedData;
        };

        match HomeworkStatus::from_api(status) {
            Some(status) => Self::Reviewed {
                name: name.clone(),
                status,
            },
            None => Self::UnknownStatus(status.clone()),
        }
    }

    /// Whether this is a diagnostic rather than a real verdict
    pub fn is_diagnostic(&self) -> bool {
        !matches!(self, Self::Reviewed { .. })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reviewed { name, status } => {
                write!(f, "Your work \"{}\" was reviewed: {}", name, status.verdict())
            }
            Self::MalformedData => f.write_str(MALFORMED_DATA),
            Self::UnknownStatus(_) => f.write_str(UNKNOWN_STATUS),
        }
    }
}

/// Translates a record into the message sent to the user
pub fn translate(record: &SubmissionRecord) -> String {
    Verdict::from_record(record).to_string()
}
