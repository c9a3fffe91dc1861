//! Authentication request and response value objects.

use serde::{Deserialize, Serialize};

use al_shared::utils::validation::{validators, Validate, ValidationErrors};

use crate::domain::entities::Role;

/// Credentials presented on login.
///
/// Either an email or a phone number identifies the account; the remote
/// authentication service is the authority on whether they match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email identifier, if the caller logs in by email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone identifier, if the caller logs in by phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Plain password; hashing happens on the remote service
    pub password: String,
}

impl LoginRequest {
    /// Login by email
    pub fn with_email(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            phone_number: None,
            password: password.into(),
        }
    }

    /// Login by phone number
    pub fn with_phone(phone_number: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: None,
            phone_number: Some(phone_number.into()),
            password: password.into(),
        }
    }
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match (&self.email, &self.phone_number) {
            (None, None) => {
                errors.add_error(
                    "email",
                    "either email or phone_number must be provided",
                    "IDENTIFIER_REQUIRED",
                );
            }
            (Some(email), _) if !validators::is_valid_email(email) => {
                errors.add_error("email", "invalid email format", "INVALID_EMAIL");
            }
            (_, Some(phone)) if !validators::is_valid_phone(phone) => {
                errors.add_error("phone_number", "invalid phone format", "INVALID_PHONE");
            }
            _ => {}
        }

        if !validators::not_empty(&self.password) {
            errors.add_error("password", "password must not be empty", "REQUIRED");
        }

        errors.into_result()
    }
}

/// An opaque refresh token, conventionally carried as a bearer credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

impl RefreshRequest {
    pub fn new(refresh_token: impl Into<String>) -> Self {
        Self {
            refresh_token: refresh_token.into(),
        }
    }
}

impl Validate for RefreshRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !validators::not_empty(&self.refresh_token) {
            errors.add_error("refresh_token", "refresh token must not be empty", "REQUIRED");
        }
        errors.into_result()
    }
}

/// Fields required to create an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub roles: Vec<Role>,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !validators::not_empty(&self.first_name) {
            errors.add_error("first_name", "first name must not be empty", "REQUIRED");
        }
        if !validators::not_empty(&self.last_name) {
            errors.add_error("last_name", "last name must not be empty", "REQUIRED");
        }
        if !validators::is_valid_email(&self.email) {
            errors.add_error("email", "invalid email format", "INVALID_EMAIL");
        }
        if !validators::is_valid_phone(&self.phone_number) {
            errors.add_error("phone_number", "invalid phone format", "INVALID_PHONE");
        }
        if !validators::not_empty(&self.password) {
            errors.add_error("password", "password must not be empty", "REQUIRED");
        }

        errors.into_result()
    }
}

/// Structured registration outcome returned by the authentication service.
///
/// Unlike login and refresh, registration reports domain-level failures
/// (duplicate account, rejected fields) inside this object rather than as
/// an error, so callers branch on `success` instead of matching on `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    /// Whether the remote service accepted the operation
    pub success: bool,

    /// Error message when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Status code the remote service answered with
    pub status_code: u16,
}

impl OperationResult {
    /// A successful outcome
    pub fn ok(status_code: u16) -> Self {
        Self {
            success: true,
            message: None,
            status_code,
        }
    }

    /// A failed outcome with a message
    pub fn failed(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            status_code,
        }
    }
}
