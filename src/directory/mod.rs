//! Directory Snapshot Module
//!
//! Owns the state of the person directory: the record type, the immutable
//! indexed snapshot, and the store that atomically swaps snapshots on reload.
//!
//! ## Core Concepts
//! - **Immutability**: a `Snapshot` is built once from a validated record set
//!   and never mutated. All query operations are pure reads.
//! - **Indexing**: each snapshot carries a login index for O(1) exact lookup
//!   and one ordered prefix index per searchable field for sub-linear token
//!   matching.
//! - **Publication**: `SnapshotStore` holds the currently served snapshot
//!   behind an `Arc`; replacing the directory builds a whole new snapshot and
//!   swaps the pointer. In-flight requests finish against the snapshot they
//!   started with.
//!
//! ## Submodules
//! - **`record`**: the fixed five-field person record and its field set.
//! - **`snapshot`**: index construction and read operations.
//! - **`store`**: atomic publish/replace of snapshots.
//! - **`loader`**: JSON record source with load-time validation.

pub mod loader;
pub mod record;
pub mod snapshot;
pub mod store;
