//! Infrastructure layer: snapshot persistence and the product manager.

pub mod error;
pub mod manager;
pub mod snapshot;

pub use error::{StoreError, StoreResult};
pub use manager::ProductManager;
pub use snapshot::{
    FileSnapshotStore, InMemorySnapshotStore, Snapshot, SnapshotStore, DEFAULT_STORE_FILE,
};
