use super::record::PersonRecord;
use super::snapshot::Snapshot;
use crate::error::DirectoryError;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Holds the currently served snapshot and swaps it atomically on reload.
///
/// Readers call [`SnapshotStore::current`] once per request and keep that
/// `Arc` for the request's lifetime, so a reload completing mid-flight never
/// changes the data a running search observes.
pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
    next_version: AtomicU64,
}

impl SnapshotStore {
    /// Builds and publishes the first snapshot (version 1). Returning `Ok`
    /// means the directory is fully indexed and ready to serve.
    pub fn new(records: Vec<PersonRecord>) -> Result<Self, DirectoryError> {
        let snapshot = Snapshot::build(records, 1)?;
        Ok(Self {
            current: RwLock::new(Arc::new(snapshot)),
            next_version: AtomicU64::new(2),
        })
    }

    pub fn current(&self) -> Arc<Snapshot> {
        self.current.read().clone()
    }

    /// Builds the replacement outside the lock; the swap itself is a single
    /// pointer store. A failed build leaves the previous snapshot serving.
    pub fn replace(&self, records: Vec<PersonRecord>) -> Result<Arc<Snapshot>, DirectoryError> {
        let version = self.next_version.fetch_add(1, Ordering::Relaxed);
        let snapshot = Arc::new(Snapshot::build(records, version)?);
        *self.current.write() = snapshot.clone();
        Ok(snapshot)
    }
}
