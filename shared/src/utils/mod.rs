//! Shared utility functions.

pub mod validation;

pub use validation::{Validate, ValidationError, ValidationErrors};
