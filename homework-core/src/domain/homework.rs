//! Homework domain types

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::cursor::Cursor;

/// A submission as reported by the review API
///
/// Both fields may be missing; that is a valid record whose verdict is the
/// malformed-data diagnostic. Any other fields the API sends are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub homework_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
}

impl SubmissionRecord {
    pub fn new(homework_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: Some(homework_name.into()),
            status: Some(status.into()),
        }
    }
}

/// Review status of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Rejected,
    Approved,
    Reviewing,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [Self::Rejected, Self::Approved, Self::Reviewing];

    /// Parses the status string used by the review API
    pub fn from_api(value: &str) -> Option<Self> {
        match value {
            "rejected" => Some(Self::Rejected),
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
        }
    }

    /// Human-readable verdict for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Rejected => "Unfortunately, the reviewer found mistakes in your work.",
            Self::Approved => {
                "The reviewer liked everything, you can move on to the next lesson."
            }
            Self::Reviewing => "Your work is still being reviewed.",
        }
    }
}

/// One page of status changes
///
/// `records` keeps the API order (newest first). `cursor` is the watermark
/// for the next request, if the API sent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResult {
    pub records: Vec<SubmissionRecord>,
    pub cursor: Option<Cursor>,
}

/// Reads an optional record list, turning any element that is not a record
/// into an empty one so it still yields the malformed-data diagnostic
pub(crate) fn lenient_records<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<SubmissionRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(values.map(|values| {
        values
            .into_iter()
            .map(|value| serde_json::from_value(value).unwrap_or_default())
            .collect()
    }))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}
