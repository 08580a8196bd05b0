//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors raised while locating, reading or writing `config.yml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No home directory to derive the default location from
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    /// The configuration directory could not be created
    #[error("Failed to create configuration directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file exists but could not be read
    #[error("Failed to read configuration from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The default configuration file could not be written
    #[error("Failed to write configuration to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for the expected fields
    #[error("Malformed configuration in {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The default configuration could not be encoded
    #[error("Failed to encode configuration: {0}")]
    Encode(#[from] serde_yaml::Error),
}
