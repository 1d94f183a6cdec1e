//! Error types for the order assembly service.

use super::ResolveError;
use crate::error::ErrorKind;
use crate::model::AccountId;
use crate::order_store::StoreError;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// The call that overran its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    AccountLookup,
    ProductCatalog,
    OrderStore,
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dependency::AccountLookup => "account lookup",
            Dependency::ProductCatalog => "product catalog",
            Dependency::OrderStore => "order store",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum OrderError {
    /// The account lookup answered, and the account does not exist.
    #[error("account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("account lookup failed: {0}")]
    AccountLookupFailed(#[source] ResolveError),

    #[error("product resolution failed: {0}")]
    ProductResolutionFailed(#[source] ResolveError),

    #[error("{dependency} did not answer within {after:?}")]
    Timeout { dependency: Dependency, after: Duration },

    #[error("order persistence failed: {0}")]
    PersistenceFailed(#[source] StoreError),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::AccountNotFound(_) => ErrorKind::ValidationFailed,
            OrderError::AccountLookupFailed(_) | OrderError::ProductResolutionFailed(_) => {
                ErrorKind::DependencyUnavailable
            }
            OrderError::Timeout { .. } => ErrorKind::Timeout,
            OrderError::PersistenceFailed(_) => ErrorKind::PersistenceFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        let missing = OrderError::AccountNotFound(AccountId::new("a1"));
        assert_eq!(missing.kind(), ErrorKind::ValidationFailed);
        assert_eq!(missing.kind().status_code(), 422);
        assert!(!missing.kind().is_retryable());

        let down = OrderError::ProductResolutionFailed(ResolveError::Unavailable("closed".into()));
        assert_eq!(down.kind().status_code(), 503);
        assert!(down.kind().is_retryable());

        let slow = OrderError::Timeout {
            dependency: Dependency::OrderStore,
            after: Duration::from_millis(50),
        };
        assert_eq!(slow.kind(), ErrorKind::Timeout);
        assert_eq!(slow.to_string(), "order store did not answer within 50ms");
    }
}
