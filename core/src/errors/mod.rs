//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{AdapterError, AuthError, TokenError, ValidationError};

use thiserror::Error;

use al_shared::errors::{error_codes, ErrorResponse};

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable error code for client identification
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Configuration { .. } => error_codes::CONFIGURATION_ERROR,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Auth(e) => e.error_code(),
            DomainError::Token(e) => e.error_code(),
            DomainError::Adapter(e) => e.error_code(),
            DomainError::ValidationErr(_) => error_codes::VALIDATION_ERROR,
        }
    }

    /// HTTP status code the excluded web layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => 422,
            DomainError::NotFound { .. } => 404,
            DomainError::Configuration { .. } => 500,
            DomainError::Internal { .. } => 500,
            DomainError::Auth(e) => e.status_code(),
            DomainError::Token(_) => 401,
            DomainError::Adapter(e) => e.status_code(),
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        ErrorResponse::new(err.error_code(), err.to_string())
    }
}

impl From<al_shared::utils::ValidationErrors> for DomainError {
    fn from(errors: al_shared::utils::ValidationErrors) -> Self {
        DomainError::Validation {
            message: errors.to_string(),
        }
    }
}
