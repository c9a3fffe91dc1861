//! Local JWT validation.
//!
//! Tokens are minted and signed by the remote authentication service; the
//! gateway checks signatures, expiry, the embedded token type and roles
//! before letting a request through to a payment operation.

mod config;
mod validator;

#[cfg(test)]
mod tests;

pub use config::TokenValidatorConfig;
pub use validator::TokenValidator;
