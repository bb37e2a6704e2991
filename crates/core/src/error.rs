//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable by the caller: retry with different input or
/// surface it to the end user. Transport concerns (status codes, bodies) are
/// mapped at the HTTP boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced item does not exist.
    #[error("not found")]
    NotFound,

    /// A conflict occurred (e.g. duplicate identifier).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A reservation asked for more units than are on hand.
    ///
    /// This is a business-rule rejection, not a defect.
    #[error("insufficient stock (requested: {requested}, available: {available})")]
    InsufficientStock { requested: u64, available: u64 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn insufficient_stock(requested: u64, available: u64) -> Self {
        Self::InsufficientStock { requested, available }
    }
}
