//! Common validation utilities

use serde::Serialize;
use std::collections::HashMap;

/// Validation error with field-level details
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Collection of validation errors
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_error(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.add(ValidationError::new(field, message, code));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Finish a validation pass, returning `Err(self)` if anything was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn to_field_errors(&self) -> HashMap<String, Vec<String>> {
        let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
        for error in &self.errors {
            field_errors
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        field_errors
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Trait for types that can be validated
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Common validation functions
pub mod validators {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static EMAIL_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

    static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").unwrap());

    static CARD_EXPIRY_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/(\d{2})$").unwrap());

    static KZ_IBAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^KZ\d{18}$").unwrap());

    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// Check if a string consists of ASCII digits only
    pub fn digits_only(value: &str) -> bool {
        !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
    }

    /// Check if a string looks like an email address
    pub fn is_valid_email(value: &str) -> bool {
        EMAIL_RE.is_match(value)
    }

    /// Check if a string looks like an international phone number
    pub fn is_valid_phone(value: &str) -> bool {
        PHONE_RE.is_match(value)
    }

    /// Parse a `MM/YY` card expiration into (month, full year)
    pub fn parse_card_expiry(value: &str) -> Option<(u32, i32)> {
        let captures = CARD_EXPIRY_RE.captures(value)?;
        let month: u32 = captures.get(1)?.as_str().parse().ok()?;
        let year_short: i32 = captures.get(2)?.as_str().parse().ok()?;
        Some((month, 2000 + year_short))
    }

    /// Check a string is a Kazakhstan IBAN: `KZ` followed by 18 digits
    pub fn is_valid_kz_iban(value: &str) -> bool {
        KZ_IBAN_RE.is_match(value)
    }

    /// Check a `MM/YY` card expiration is well formed and not in the past
    pub fn is_future_card_expiry(value: &str) -> bool {
        use chrono::Datelike;

        let Some((month, year)) = parse_card_expiry(value) else {
            return false;
        };
        let today = chrono::Utc::now().date_naive();
        // A card is valid through the last day of its expiry month.
        year > today.year() || (year == today.year() && month >= today.month())
    }
}
