//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while validating a test suite.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL for test '{title}': {reason}")]
    InvalidUrl {
        /// Title of the offending test case.
        title: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// Two test cases share the same title.
    #[error("duplicate test title: {0}")]
    DuplicateTitle(String),

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
