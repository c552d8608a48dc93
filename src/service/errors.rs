//! # Service Errors
//!
//! Point operations signal `NotFound` for an absent id; everything else
//! is a store failure passed through unchanged.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service operation failures
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested id has no matching note
    #[error("Note not found")]
    NotFound,

    /// Underlying store failure, propagated unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}
