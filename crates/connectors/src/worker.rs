//! Worker pool
//!
//! The driver side of the poll loop. Each task config gets its own tokio
//! task for isolation; a stalled endpoint never blocks other workers.
//! Workers forward records to the pipeline channel, commit offsets after
//! delivery, and apply the driver retry policy: retryable failures back
//! off briefly and try again, unrecoverable failures stop the worker.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use pulse_config::HttpSourceConfig;

use crate::error::ConnectorError;
use crate::offset::OffsetStore;
use crate::record::SourceRecord;
use crate::task::HttpSourceTask;

/// Delay before re-polling after a retryable failure
const RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// Manages the poll workers for one connector
pub struct WorkerPool {
    record_sender: mpsc::Sender<SourceRecord>,
    offsets: Arc<dyn OffsetStore>,
    cancel: CancellationToken,
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Create an empty pool
    ///
    /// Records flow into `record_sender`; offsets are committed to
    /// `offsets` after each record is delivered. Cancelling `cancel`
    /// unblocks every worker promptly, whether waiting or mid-request.
    pub fn new(
        record_sender: mpsc::Sender<SourceRecord>,
        offsets: Arc<dyn OffsetStore>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            record_sender,
            offsets,
            cancel,
            handles: Vec::new(),
        }
    }

    /// Start a task for one config and spawn its worker
    pub fn spawn(
        &mut self,
        worker_id: usize,
        config: HttpSourceConfig,
    ) -> Result<(), ConnectorError> {
        let task = HttpSourceTask::start(&config, self.offsets.as_ref(), self.cancel.child_token())?;

        info!(worker_id, url = %config.url, "spawning poll worker");
        self.handles.push(tokio::spawn(run_worker(
            worker_id,
            task,
            self.record_sender.clone(),
            Arc::clone(&self.offsets),
            self.cancel.clone(),
        )));
        Ok(())
    }

    /// Number of spawned workers
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether no workers have been spawned
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Cancel all workers and wait for them to finish
    pub async fn shutdown(self) {
        info!(workers = self.handles.len(), "shutting down worker pool");
        self.cancel.cancel();
        drop(self.record_sender);
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "worker terminated abnormally");
            }
        }
    }
}

/// Poll loop for one worker (runs inside its spawned task)
async fn run_worker(
    worker_id: usize,
    mut task: HttpSourceTask,
    sender: mpsc::Sender<SourceRecord>,
    offsets: Arc<dyn OffsetStore>,
    cancel: CancellationToken,
) {
    'poll: loop {
        match task.poll().await {
            Ok(records) => {
                for record in records {
                    let partition = record.partition.clone();
                    let offset = record.offset;
                    if sender.send(record).await.is_err() {
                        error!(worker_id, "record sink closed, stopping worker");
                        break 'poll;
                    }
                    offsets.commit(&partition, offset);
                }
            }
            Err(e) if e.is_cancelled() => {
                debug!(worker_id, "worker cancelled");
                break;
            }
            Err(e) if e.is_retryable() => {
                warn!(worker_id, error = %e, "poll failed, will retry");
                tokio::select! {
                    _ = tokio::time::sleep(RETRY_BACKOFF) => {}
                    _ = cancel.cancelled() => break,
                }
            }
            Err(e) => {
                error!(worker_id, error = %e, "poll failed with unrecoverable error, stopping worker");
                break;
            }
        }
    }

    task.stop();
}
