//! Key-value store error types.

use std::path::PathBuf;

/// Errors that can occur while reading or writing persisted values.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read or write the backing file
    #[error("Store I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Stored value is not valid JSON
    #[error("Stored value for '{key}' is malformed: {message}")]
    Malformed { key: String, message: String },

    /// Failed to serialize a value for storage
    #[error("Failed to serialize value: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The in-memory store lock was poisoned
    #[error("Store lock poisoned")]
    LockPoisoned,
}
