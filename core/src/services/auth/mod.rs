//! Authentication facade module
//!
//! This module provides the thin use-case layer in front of the remote
//! authentication service:
//! - Login, token refresh and registration forwarding
//! - Local access-token verification

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
