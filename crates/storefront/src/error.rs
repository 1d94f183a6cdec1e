//! Failure classification shared by the service-level error types.

use std::fmt;

/// Coarse failure classes, each with the status code a transport adapter
/// would answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested record does not exist.
    NotFound,
    /// The request was well-formed but refers to something invalid.
    ValidationFailed,
    /// A collaborator could not be reached.
    DependencyUnavailable,
    /// A collaborator or the store did not answer within the deadline.
    Timeout,
    /// The order could not be stored or read back.
    PersistenceFailed,
}

impl ErrorKind {
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::ValidationFailed => 422,
            ErrorKind::DependencyUnavailable => 503,
            ErrorKind::Timeout => 504,
            ErrorKind::PersistenceFailed => 500,
        }
    }

    /// Whether the caller may retry the same request unchanged.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            ErrorKind::DependencyUnavailable | ErrorKind::Timeout | ErrorKind::PersistenceFailed
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::ValidationFailed => "validation_failed",
            ErrorKind::DependencyUnavailable => "dependency_unavailable",
            ErrorKind::Timeout => "timeout",
            ErrorKind::PersistenceFailed => "persistence_failed",
        };
        f.write_str(name)
    }
}
