//! # Store Errors
//!
//! Typed failure results for store operations. All of these are expected,
//! recoverable outcomes except `Internal`, which signals a programming
//! defect (a poisoned lock) and is the only case the transport layer maps
//! to a generic 5xx response.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No live record with the requested id
    #[error("User not found")]
    NotFound,

    /// One or more field constraints violated; carries the full ordered
    /// violation list, not just the first
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// Normalized email already used by a different live record
    #[error("Email already exists")]
    Conflict,

    /// Invariant violation inside the store itself
    #[error("Internal store error: {0}")]
    Internal(String),
}
