//! Pulse - Connectors
//!
//! Pull-based HTTP source connector that polls an endpoint on an interval
//! and produces timestamped [`SourceRecord`]s for the pipeline.
//!
//! # Design Principles
//!
//! - **Pull-based**: each worker fetches the endpoint on its own schedule
//! - **Opaque payloads**: the response body is forwarded as a raw string,
//!   no parsing or schema inference
//! - **Offset-tracked**: every record carries the advanced checkpoint so a
//!   restart resumes from the last successful fetch instead of re-polling
//!   immediately
//! - **Classify, don't retry**: a failed poll surfaces as retryable or
//!   fatal; the retry policy belongs to the driver
//!
//! # Example
//!
//! ```ignore
//! use pulse_config::HttpSourceConfig;
//! use pulse_connectors::{HttpSourceTask, MemoryOffsetStore};
//! use tokio_util::sync::CancellationToken;
//!
//! let config = HttpSourceConfig {
//!     url: "https://api.example.com/items".into(),
//!     topic: "http-items".into(),
//!     ..Default::default()
//! };
//!
//! let offsets = MemoryOffsetStore::new();
//! let mut task = HttpSourceTask::start(&config, &offsets, CancellationToken::new())?;
//! let records = task.poll().await?;
//! ```

mod client;
mod connector;
mod error;
mod offset;
mod record;
mod request;
mod task;
mod worker;

pub use client::HttpApiClient;
pub use connector::HttpSourceConnector;
pub use error::ConnectorError;
pub use offset::{MemoryOffsetStore, OffsetStore};
pub use record::{SourceOffset, SourcePartition, SourceRecord};
pub use request::{RequestBuilder, RequestDescriptor};
pub use task::HttpSourceTask;
pub use worker::WorkerPool;
