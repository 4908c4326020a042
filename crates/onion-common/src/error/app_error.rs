//! Application error types
//!
//! The composition root is the only place a failure is rendered for a human;
//! everything below it passes errors up as values.

use onion_core::{AccountServiceError, UserServiceError};
use serde::Serialize;
use std::fmt;

use crate::config::ConfigError;
use crate::telemetry::TracingError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Lookup errors
    #[error(transparent)]
    UserLookup(#[from] UserServiceError),

    #[error(transparent)]
    AccountLookup(#[from] AccountServiceError),

    // Telemetry errors
    #[error(transparent)]
    Telemetry(#[from] TracingError),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Get the process exit code for this error
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            // Usage errors
            Self::InvalidInput(_) => 64,

            // Configuration errors
            Self::Config(_) | Self::Telemetry(_) => 78,

            // Unavailable backing store
            Self::Database(_) => 69,

            // Lookup faults
            Self::UserLookup(_) | Self::AccountLookup(_) => 65,

            Self::Internal(_) => 70,
        }
    }

    /// Get error code for reports
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::UserLookup(e) => e.code(),
            Self::AccountLookup(e) => e.code(),
            Self::Telemetry(_) => "TELEMETRY_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this error was caused by the caller's input or setup
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Config(_))
    }

    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(msg: impl fmt::Display) -> Self {
        Self::InvalidInput(msg.to_string())
    }

    /// Create a database error
    #[must_use]
    pub fn database(msg: impl fmt::Display) -> Self {
        Self::Database(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error report structure printed by the composition root
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let details = match err {
            AppError::UserLookup(e) => Some(e.domain_error()),
            AppError::AccountLookup(e) => Some(e.domain_error()),
            _ => None,
        }
        .filter(|domain| domain.has_source())
        .map(|domain| serde_json::json!({ "cause": domain.message() }));

        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
