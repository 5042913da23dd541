pub mod accident_repository;
pub mod user_repository;

use chrono::{DateTime, Utc};

/// Timestamps are stored as unix milliseconds
pub(crate) fn to_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}
