//! Persistence error model.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while reading or writing a snapshot.
///
/// A missing snapshot is not an error: backends report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot location could not be read or written.
    #[error("failed to {action} snapshot at {location}: {source}")]
    Io {
        action: &'static str,
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// A snapshot exists but could not be decoded.
    #[error("snapshot at {location} is corrupt: {reason}")]
    Corrupt { location: String, reason: String },

    /// The in-memory state holds a value the snapshot format cannot carry.
    #[error("snapshot cannot represent {0}")]
    Unrepresentable(String),
}

impl StoreError {
    pub fn io(action: &'static str, location: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            location: location.into(),
            source,
        }
    }

    pub fn corrupt(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            location: location.into(),
            reason: reason.into(),
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
