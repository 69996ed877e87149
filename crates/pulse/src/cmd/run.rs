//! Run command - poll the configured endpoint and emit records
//!
//! Spawns one worker per task config and writes produced records as JSON
//! lines to stdout until interrupted.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use pulse_config::Config;
use pulse_connectors::{
    HttpSourceConnector, MemoryOffsetStore, OffsetStore, SourceRecord, WorkerPool,
};

/// Run command arguments
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

/// Run the poller until interrupted
pub async fn run(args: RunArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    config.validate().context("invalid configuration")?;

    let mut connector = HttpSourceConnector::new();
    connector.start(config.source.clone())?;
    let task_configs = connector.task_configs(config.max_tasks)?;

    info!(
        version = HttpSourceConnector::version(),
        url = %config.source.url,
        topic = %config.source.topic,
        tasks = task_configs.len(),
        "starting pulse"
    );

    let offsets = Arc::new(MemoryOffsetStore::new());
    let cancel = CancellationToken::new();
    let (record_tx, mut record_rx) = mpsc::channel::<SourceRecord>(128);

    let mut pool = WorkerPool::new(
        record_tx,
        Arc::clone(&offsets) as Arc<dyn OffsetStore>,
        cancel.clone(),
    );
    for (worker_id, task_config) in task_configs.into_iter().enumerate() {
        pool.spawn(worker_id, task_config)?;
    }

    // Stdout is the record sink: one JSON line per record
    let printer = tokio::spawn(async move {
        while let Some(record) = record_rx.recv().await {
            match serde_json::to_string(&record) {
                Ok(line) => println!("{}", line),
                Err(e) => error!(error = %e, "failed to serialize record"),
            }
        }
    });

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("shutdown signal received");

    pool.shutdown().await;
    connector.stop();
    printer.await.context("record printer failed")?;

    Ok(())
}
