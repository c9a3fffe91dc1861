//! Common type definitions shared across the gateway crates.

mod response;

pub use response::ApiResponse;
