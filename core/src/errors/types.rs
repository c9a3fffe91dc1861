//! Specific error taxonomies for authentication, token validation and
//! upstream adapters.
//!
//! Facade services never translate these: whatever an adapter raises is
//! what the caller sees, so every variant here maps to a stable error
//! code and an HTTP status for the web layer to render.

use thiserror::Error;

use al_shared::errors::error_codes;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials provided.")]
    InvalidCredentials,

    #[error("Authentication failed.")]
    AuthenticationFailed,

    #[error("Access denied.")]
    AccessDenied,

    #[error("Account already exists.")]
    AccountConflict,
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::AuthenticationFailed => error_codes::AUTHENTICATION_FAILED,
            AuthError::AccessDenied => error_codes::ACCESS_DENIED,
            AuthError::AccountConflict => error_codes::ACCOUNT_CONFLICT,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials | AuthError::AuthenticationFailed => 401,
            AuthError::AccessDenied => 403,
            AuthError::AccountConflict => 409,
        }
    }
}

/// Token validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Wrong token type: expected {expected}")]
    WrongTokenType { expected: &'static str },

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token does not carry a required role")]
    InsufficientRole,
}

impl TokenError {
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
            TokenError::InvalidTokenFormat
            | TokenError::InvalidSignature
            | TokenError::TokenNotYetValid
            | TokenError::MissingClaim { .. } => error_codes::INVALID_TOKEN,
            TokenError::WrongTokenType { .. } => error_codes::WRONG_TOKEN_TYPE,
            TokenError::InsufficientRole => error_codes::INSUFFICIENT_ROLE,
        }
    }
}

/// Errors raised by the RPC adapters that front the remote services.
///
/// `Unreachable` and `Timeout` describe the transport; `RemoteFailure`
/// carries a status the remote service answered with that the gateway has
/// no specific mapping for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("{service} is unavailable.")]
    Unreachable { service: String },

    #[error("Timeout waiting for response from {service}.")]
    Timeout { service: String },

    #[error("Remote service failure ({status}): {message}")]
    RemoteFailure { status: u16, message: String },
}

impl AdapterError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AdapterError::Unreachable { .. } => error_codes::SOURCE_UNAVAILABLE,
            AdapterError::Timeout { .. } => error_codes::SOURCE_TIMEOUT,
            AdapterError::RemoteFailure { .. } => error_codes::REMOTE_FAILURE,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            AdapterError::Unreachable { .. } => 503,
            AdapterError::Timeout { .. } => 504,
            AdapterError::RemoteFailure { status, .. } => *status,
        }
    }
}

/// Field-level validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length for field: {field} (expected: {expected}, actual: {actual})")]
    InvalidLength {
        field: String,
        expected: String,
        actual: usize,
    },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid phone format")]
    InvalidPhone,

    #[error("Card expiration date must be in the future")]
    ExpiredCard,
}
