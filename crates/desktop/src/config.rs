//! Desktop configuration, read from the environment.

use std::path::PathBuf;

use pantry_infra::DEFAULT_STORE_FILE;

/// Environment variable overriding the snapshot file location.
pub const STORE_PATH_VAR: &str = "PANTRY_STORE_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    /// Snapshot file, relative paths resolve against the working directory.
    pub store_path: PathBuf,
}

impl DesktopConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store_path = lookup(STORE_PATH_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));

        Self { store_path }
    }
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
