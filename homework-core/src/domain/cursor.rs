//! Polling cursor

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Timestamp watermark between already-seen and not-yet-seen submissions
///
/// Seconds since the Unix epoch. Negative values are clamped to zero.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cursor(i64);

impl Cursor {
    /// Cursor that matches every submission ever made
    pub const EPOCH: Cursor = Cursor(0);

    pub fn new(secs: i64) -> Self {
        Self(secs.max(0))
    }

    /// Cursor at the current wall-clock time
    pub fn now() -> Self {
        Self::new(chrono::Utc::now().timestamp())
    }

    pub fn as_secs(&self) -> i64 {
        self.0
    }

    /// Moves the cursor forward to `next`, if there is one
    ///
    /// Returns `true` when the cursor changed. A missing or older value leaves
    /// the cursor where it is.
    pub fn advance(&mut self, next: Option<Cursor>) -> bool {
        match next {
            Some(next) if next > *self => {
                *self = next;
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reads an optional cursor, treating anything that is not a whole number as absent
pub(crate) fn lenient_cursor<'de, D>(deserializer: D) -> Result<Option<Cursor>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(whole_seconds).map(Cursor::new))
}

fn whole_seconds(value: serde_json::Value) -> Option<i64> {
    if let Some(secs) = value.as_i64() {
        return Some(secs);
    }
    value
        .as_f64()
        .filter(|secs| secs.fract() == 0.0 && secs.abs() < i64::MAX as f64)
        .map(|secs| secs as i64)
}
