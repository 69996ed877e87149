//! Offset persistence interface
//!
//! The connector reads a persisted offset once at task start and hands
//! updated offsets back alongside each produced record; writing them is the
//! driver's job. [`MemoryOffsetStore`] is the in-process implementation used
//! by the binary and by tests; a deployment backed by a real key-value
//! store implements [`OffsetStore`] the same way.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::record::{SourceOffset, SourcePartition};

/// Key-value store of per-partition progress
pub trait OffsetStore: Send + Sync {
    /// Read the persisted offset for a partition, if any
    fn offset(&self, partition: &SourcePartition) -> Option<SourceOffset>;

    /// Persist the offset for a partition
    fn commit(&self, partition: &SourcePartition, offset: SourceOffset);
}

/// In-memory offset store
#[derive(Debug, Default)]
pub struct MemoryOffsetStore {
    offsets: RwLock<HashMap<SourcePartition, SourceOffset>>,
}

impl MemoryOffsetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of partitions with a recorded offset
    pub fn len(&self) -> usize {
        self.offsets.read().len()
    }

    /// Whether no offsets have been recorded
    pub fn is_empty(&self) -> bool {
        self.offsets.read().is_empty()
    }
}

impl OffsetStore for MemoryOffsetStore {
    fn offset(&self, partition: &SourcePartition) -> Option<SourceOffset> {
        self.offsets.read().get(partition).copied()
    }

    fn commit(&self, partition: &SourcePartition, offset: SourceOffset) {
        self.offsets.write().insert(partition.clone(), offset);
    }
}
