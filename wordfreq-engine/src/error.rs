//! Engine error types
//!
//! Every variant is fatal to the run that produced it.

use thiserror::Error;
use wordfreq_core::CoreError;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// Configuration error, detected before any I/O
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Locator names a remote store
    #[error("unsupported resource locator '{locator}': only local paths and '-' are supported")]
    UnsupportedLocator {
        /// The rejected locator
        locator: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),

    /// Execution error
    #[error("execution failed: {0}")]
    ExecutionError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
