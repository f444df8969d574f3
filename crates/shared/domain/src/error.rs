//! Domain-level errors.
//!
//! These errors cross the port boundaries. Adapters translate their
//! infrastructure failures (database, HTTP) into one of these variants, so
//! every implementation of a port fails the same way.

use thiserror::Error;

/// Domain-specific errors for business rule violations and port failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("{0}")]
    Validation(String),

    /// Entity with the same email already exists (conflict)
    #[error("{0} with this email already exists")]
    Conflict(String),

    /// User store failure
    #[error("Database error: {0}")]
    Database(String),

    /// Notification delivery failure
    #[error("Email service error: {0}")]
    Email(String),

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(entity: impl Into<String>) -> Self {
        DomainError::Conflict(entity.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        DomainError::Database(msg.into())
    }

    /// Create an email delivery error
    pub fn email(msg: impl Into<String>) -> Self {
        DomainError::Email(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }

    /// Check if this is a duplicate-entity conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, DomainError::Conflict(_))
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
