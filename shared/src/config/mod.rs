//! Configuration types for the gateway.
//!
//! Configuration is sourced from environment variables (optionally loaded
//! from a per-environment `.env` file). The gateway only *validates* JWT
//! tokens, so [`JwtConfig`] carries the verification side of the key
//! material; signing keys stay with the remote authentication service.

mod auth;
mod broker;
mod environment;

pub use auth::{JwtAlgorithm, JwtConfig};
pub use broker::BrokerConfig;
pub use environment::Environment;

use std::env;

/// Aggregate configuration for the gateway process.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Resolved runtime environment
    pub environment: Environment,

    /// JWT validation settings
    pub jwt: JwtConfig,

    /// Message broker settings consumed by the RPC adapters
    pub broker: BrokerConfig,
}

impl GatewayConfig {
    /// Load the full configuration from the environment.
    ///
    /// Reads the environment name first, loads the matching `.env` file if
    /// present, then resolves the individual sections. Missing optional
    /// values fall back to development defaults; missing required values
    /// (the JWT verification key) are reported as an error string suitable
    /// for startup diagnostics.
    pub fn from_env() -> Result<Self, String> {
        let environment = Environment::from_env();

        // A missing .env file is fine; real deployments inject variables directly.
        let _ = dotenvy::from_filename(environment.env_file());

        Ok(Self {
            environment,
            jwt: JwtConfig::from_env()?,
            broker: BrokerConfig::from_env(),
        })
    }
}

pub(crate) fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
