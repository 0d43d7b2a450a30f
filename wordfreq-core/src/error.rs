//! Core error types (deterministic only)

use thiserror::Error;

/// Core errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A token's occurrence count no longer fits in a `u64`
    #[error("count overflow for token '{token}'")]
    Overflow {
        /// The token whose count overflowed
        token: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
