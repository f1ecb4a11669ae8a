use std::sync::RwLock;

use super::{Snapshot, SnapshotStore};
use crate::error::{StoreError, StoreResult};

const LOCATION: &str = "<memory>";

/// In-memory snapshot store for tests/dev.
///
/// Holds the encoded document, so snapshots pass through the same codec as
/// the file backend.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    bytes: RwLock<Option<Vec<u8>>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored bytes, e.g. to simulate a damaged store.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: RwLock::new(Some(bytes.into())),
        }
    }

    /// Raw stored bytes, if anything has been saved.
    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.bytes.read().ok()?.clone()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> StoreResult<Option<Snapshot>> {
        let guard = self.bytes.read().map_err(|_| poisoned("read"))?;
        match guard.as_deref() {
            Some(bytes) => Snapshot::decode(bytes, LOCATION),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let bytes = snapshot.encode()?;
        let mut guard = self.bytes.write().map_err(|_| poisoned("write"))?;
        *guard = Some(bytes);
        Ok(())
    }

    fn location(&self) -> String {
        LOCATION.to_string()
    }
}

fn poisoned(action: &'static str) -> StoreError {
    StoreError::io(
        action,
        LOCATION,
        std::io::Error::other("lock poisoned"),
    )
}
