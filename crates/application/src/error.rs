//! Application error types

use probe_domain::DomainError;
use thiserror::Error;

/// Application-level errors.
///
/// Raised before a run starts. Once running, failures are reported through
/// test status instead.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The suite failed validation.
    #[error("invalid suite: {0}")]
    Domain(#[from] DomainError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
