use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{Snapshot, SnapshotStore};
use crate::error::{StoreError, StoreResult};

/// Snapshot file name used when no path is configured.
pub const DEFAULT_STORE_FILE: &str = "products_data.json";

/// Snapshot kept in a single JSON file.
///
/// Saves go through a sibling temporary file that is synced and then renamed
/// over the target, so readers only ever see a complete snapshot.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_STORE_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_temp(&self, temp_path: &Path, bytes: &[u8]) -> StoreResult<()> {
        let location = temp_path.display().to_string();
        let file = File::create(temp_path).map_err(|e| StoreError::io("create", &location, e))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(bytes)
            .map_err(|e| StoreError::io("write", &location, e))?;
        writer
            .flush()
            .map_err(|e| StoreError::io("flush", &location, e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| StoreError::io("sync", &location, e))?;
        Ok(())
    }
}

impl Default for FileSnapshotStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> StoreResult<Option<Snapshot>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no snapshot yet");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io("read", self.location(), e)),
        };

        Snapshot::decode(&bytes, &self.location())
    }

    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let bytes = snapshot.encode()?;
        let temp_path = self.temp_path();

        let written = self.write_temp(&temp_path, &bytes).and_then(|()| {
            fs::rename(&temp_path, &self.path)
                .map_err(|e| StoreError::io("replace", self.location(), e))
        });

        if written.is_err() {
            // Leftover temp files are harmless but untidy.
            let _ = fs::remove_file(&temp_path);
        }
        written
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
