//! Record and offset types produced by the HTTP source
//!
//! One [`SourceRecord`] is produced per successful poll. The partition and
//! offset travel with the record so the driver can persist progress after
//! delivering it downstream.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable key identifying which endpoint a task polls
///
/// Tasks polling the same URL share a partition and therefore resume from
/// the same persisted offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePartition {
    /// The polled endpoint URL
    pub url: String,
}

impl SourcePartition {
    /// Create a partition key for a URL
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Progress marker for a partition
///
/// Advances monotonically: it is only ever written after a successful fetch,
/// with the poll invocation time as the new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOffset {
    /// Epoch millis of the last successful poll
    pub last_polled_timestamp: u64,
}

impl SourceOffset {
    /// Create an offset from an epoch-millis timestamp
    pub fn new(last_polled_timestamp: u64) -> Self {
        Self {
            last_polled_timestamp,
        }
    }
}

/// A timestamped record produced by one successful poll
///
/// Immutable after creation. The payload is the raw response body; no
/// parsing or schema inference is applied.
#[derive(Debug, Clone, Serialize)]
pub struct SourceRecord {
    /// Partition this record belongs to
    pub partition: SourcePartition,

    /// Offset to persist once the record is delivered
    pub offset: SourceOffset,

    /// Destination topic
    pub topic: String,

    /// Instant the payload was fetched (RFC 3339 on the wire)
    pub fetched_at: DateTime<Utc>,

    /// Raw response body
    pub payload: String,
}
