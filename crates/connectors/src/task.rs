//! Poll task
//!
//! The per-worker state machine. Each invocation of [`poll`] either waits
//! out the remainder of the poll interval and returns nothing, or fetches
//! the endpoint once and returns a single record carrying the advanced
//! offset. `last_poll_time` is the only mutable state: seeded from the
//! offset store at start, advanced only after a successful fetch, so a
//! failed cycle never skips ahead.
//!
//! [`poll`]: HttpSourceTask::poll

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use pulse_config::{HttpMethod, HttpSourceConfig};

use crate::client::HttpApiClient;
use crate::error::ConnectorError;
use crate::offset::OffsetStore;
use crate::record::{SourceOffset, SourcePartition, SourceRecord};
use crate::request::RequestBuilder;

/// A polling task for one HTTP endpoint
pub struct HttpSourceTask {
    url: String,
    method: HttpMethod,
    poll_interval_ms: u64,
    topic: String,
    request: RequestBuilder,
    client: Option<HttpApiClient>,
    partition: SourcePartition,
    last_poll_time: u64,
    cancel: CancellationToken,
}

impl HttpSourceTask {
    /// Task version
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Start a task: validate config, build the client, seed the offset
    ///
    /// The persisted offset for the partition `{url}` is read once here.
    /// Without one, `last_poll_time` starts at zero so the first poll
    /// always fetches immediately.
    pub fn start(
        config: &HttpSourceConfig,
        offsets: &dyn OffsetStore,
        cancel: CancellationToken,
    ) -> Result<Self, ConnectorError> {
        config.validate()?;

        let client = HttpApiClient::new(config)?;
        let partition = SourcePartition::new(&config.url);

        let last_poll_time = match offsets.offset(&partition) {
            Some(offset) => {
                info!(
                    url = %config.url,
                    last_polled_timestamp = offset.last_polled_timestamp,
                    "found persisted offset"
                );
                offset.last_polled_timestamp
            }
            None => {
                info!(url = %config.url, "no previous offset found, starting from scratch");
                0
            }
        };

        Ok(Self {
            url: config.url.clone(),
            method: config.method,
            poll_interval_ms: config.poll_interval_ms,
            topic: config.topic.clone(),
            request: RequestBuilder::from_config(config),
            client: Some(client),
            partition,
            last_poll_time,
            cancel,
        })
    }

    /// Poll the endpoint once
    ///
    /// If the interval has not yet elapsed, waits out the remainder and
    /// returns an empty result for this cycle; the wait is raced against
    /// the cancellation token so shutdown surfaces promptly as
    /// [`ConnectorError::Cancelled`]. Otherwise performs exactly one
    /// request and, on success, returns one record and advances the
    /// checkpoint. Failures propagate classified; `last_poll_time` stays
    /// untouched so the next attempt recomputes against the old value.
    pub async fn poll(&mut self) -> Result<Vec<SourceRecord>, ConnectorError> {
        let now = epoch_millis();
        let elapsed = now.saturating_sub(self.last_poll_time);

        if elapsed < self.poll_interval_ms {
            let wait = self.poll_interval_ms - elapsed;
            debug!(wait_ms = wait, "waiting before next poll");
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(wait)) => {}
                _ = self.cancel.cancelled() => return Err(ConnectorError::Cancelled),
            }
            return Ok(Vec::new());
        }

        let client = self.client.as_ref().ok_or(ConnectorError::NotStarted)?;
        let request = self.request.build(&self.url, self.method)?;

        info!(url = %self.url, "polling endpoint");
        let payload = tokio::select! {
            result = client.execute(request) => result?,
            _ = self.cancel.cancelled() => return Err(ConnectorError::Cancelled),
        };
        info!(bytes = payload.len(), "successfully fetched payload");

        let record = SourceRecord {
            partition: self.partition.clone(),
            offset: SourceOffset::new(now),
            topic: self.topic.clone(),
            fetched_at: Utc::now(),
            payload,
        };
        self.last_poll_time = now;

        Ok(vec![record])
    }

    /// Stop the task and release the pooled client. Idempotent.
    pub fn stop(&mut self) {
        info!(url = %self.url, "stopping HTTP source task");
        if let Some(client) = self.client.take() {
            client.close();
        }
    }

    /// Partition key this task polls
    pub fn partition(&self) -> &SourcePartition {
        &self.partition
    }

    /// Timestamp of the last successful poll (epoch millis)
    pub fn last_poll_time(&self) -> u64 {
        self.last_poll_time
    }

    #[cfg(test)]
    pub(crate) fn set_last_poll_time(&mut self, last_poll_time: u64) {
        self.last_poll_time = last_poll_time;
    }
}

/// Current time as epoch millis
fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
