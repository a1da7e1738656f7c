use thiserror::Error;

/// Errors raised by repository implementations
///
/// Repositories report raw storage failures only; translating them into
/// domain-level error conditions is the service layer's job.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// No record exists under the given identifier
    #[error("record not found")]
    NotFound,

    /// The backing store failed; never produced by the in-memory
    /// implementations, reserved for persistent backends
    #[error("storage backend failure: {0}")]
    Backend(String),
}
