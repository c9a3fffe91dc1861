//! Shared utilities and common types for the AutoLink gateway
//!
//! This crate provides common functionality used across the gateway crates:
//! - Configuration types
//! - Error response structures
//! - Common type definitions
//! - Validation utilities

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{BrokerConfig, Environment, GatewayConfig, JwtAlgorithm, JwtConfig};
pub use errors::{error_codes, ErrorResponse};
pub use types::ApiResponse;
pub use utils::validation;
