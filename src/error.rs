//! Application-wide error types.
//!
//! This module defines the top-level error type that the startup path
//! returns, wrapping the module-specific errors.

pub use crate::config::ConfigError;
pub use crate::store::StoreError;

/// Main application error type.
///
/// Encompasses the errors that can abort startup or the terminal session.
/// Remote lookup failures never reach this type; the session state absorbs
/// them.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Persistent store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
