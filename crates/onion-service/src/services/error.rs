//! Service layer error types

use onion_common::AppError;
use onion_core::{AccountServiceError, UserServiceError};
use thiserror::Error;

/// Failure of a lookup that chains several services
///
/// Keeps track of which step failed.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error(transparent)]
    User(#[from] UserServiceError),

    #[error(transparent)]
    Account(#[from] AccountServiceError),
}

impl LookupError {
    /// Get the error code of the failing step
    pub fn code(&self) -> &'static str {
        match self {
            Self::User(e) => e.code(),
            Self::Account(e) => e.code(),
        }
    }

    /// Check if the user step failed
    pub fn is_user_failure(&self) -> bool {
        matches!(self, Self::User(_))
    }
}

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::User(e) => AppError::UserLookup(e),
            LookupError::Account(e) => AppError::AccountLookup(e),
        }
    }
}

/// Errors raised while assembling services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Missing dependency: {0} is required")]
    MissingDependency(&'static str),
}

impl ServiceError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingDependency(_) => "MISSING_DEPENDENCY",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        AppError::internal(err)
    }
}

/// Result type for service assembly
pub type ServiceResult<T> = Result<T, ServiceError>;
