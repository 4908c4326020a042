//! Service errors - failures a lookup may report
//!
//! Absence of a record is never one of these; it is an `Ok(None)`.

use std::error::Error as StdError;

use thiserror::Error;

use crate::error::DomainError;

/// User lookup failures
#[derive(Debug, Clone, Error)]
pub enum UserServiceError {
    /// The underlying query raised or was rejected
    #[error("User query failed: {0}")]
    QueryFailed(#[source] DomainError),

    /// A stored record did not validate as a user
    #[error("Invalid user data: {0}")]
    InvalidData(#[source] DomainError),
}

impl UserServiceError {
    /// Wrap a failed query, keeping the original error as context
    pub fn query_failed<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::QueryFailed(DomainError::from_error(err))
    }

    /// Wrap a record that failed validation
    pub fn invalid_data<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::InvalidData(DomainError::from_error(err))
    }

    /// Get an error code string for logs and exit reports
    pub fn code(&self) -> &'static str {
        match self {
            Self::QueryFailed(_) => "USER_QUERY_FAILED",
            Self::InvalidData(_) => "INVALID_USER_DATA",
        }
    }

    /// The underlying domain error
    pub fn domain_error(&self) -> &DomainError {
        match self {
            Self::QueryFailed(e) | Self::InvalidData(e) => e,
        }
    }

    /// Check if this is a query failure
    pub fn is_query_failure(&self) -> bool {
        matches!(self, Self::QueryFailed(_))
    }
}

/// Account lookup failures
#[derive(Debug, Clone, Error)]
pub enum AccountServiceError {
    /// The underlying query raised or was rejected
    #[error("Account query failed: {0}")]
    QueryFailed(#[source] DomainError),

    /// A stored record did not validate as an account
    #[error("Invalid account data: {0}")]
    InvalidData(#[source] DomainError),
}

impl AccountServiceError {
    /// Wrap a failed query, keeping the original error as context
    pub fn query_failed<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::QueryFailed(DomainError::from_error(err))
    }

    /// Wrap a record that failed validation
    pub fn invalid_data<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::InvalidData(DomainError::from_error(err))
    }

    /// Get an error code string for logs and exit reports
    pub fn code(&self) -> &'static str {
        match self {
            Self::QueryFailed(_) => "ACCOUNT_QUERY_FAILED",
            Self::InvalidData(_) => "INVALID_ACCOUNT_DATA",
        }
    }

    /// The underlying domain error
    pub fn domain_error(&self) -> &DomainError {
        match self {
            Self::QueryFailed(e) | Self::InvalidData(e) => e,
        }
    }

    /// Check if this is a query failure
    pub fn is_query_failure(&self) -> bool {
        matches!(self, Self::QueryFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::UserId;

    #[derive(Debug, Error)]
    #[error("relation \"users\" does not exist")]
    struct MissingTable;

    #[test]
    fn test_query_failed_keeps_original_error() {
        let err = UserServiceError::query_failed(MissingTable);
        assert!(err.is_query_failure());
        assert_eq!(err.code(), "USER_QUERY_FAILED");
        assert!(err.domain_error().source_as::<MissingTable>().is_some());
        assert_eq!(
            err.to_string(),
            "User query failed: relation \"users\" does not exist"
        );
    }

    #[test]
    fn test_invalid_data_from_id_parse_error() {
        let parse_err = UserId::parse("42").unwrap_err();
        let err = AccountServiceError::invalid_data(parse_err);
        assert!(!err.is_query_failure());
        assert_eq!(err.code(), "INVALID_ACCOUNT_DATA");
        assert_eq!(
            err.to_string(),
            "Invalid account data: invalid user id: `42` is not a UUID"
        );
    }

    #[test]
    fn test_error_source_chain() {
        let err = AccountServiceError::query_failed(MissingTable);
        let source = err.source().expect("domain error source");
        assert!(source.source().is_some());
    }
}
