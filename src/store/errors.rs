//! # Store Errors
//!
//! Failure taxonomy for store operations. Store failures are propagated
//! unchanged to the caller; nothing here is retried or recovered locally.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation failures
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Underlying I/O failure (transient or otherwise)
    #[error("store I/O failure: {0}")]
    Io(String),

    /// Internal engine failure
    #[error("store internal failure: {0}")]
    Internal(String),
}
