//! JWT validation configuration
//!
//! The gateway never signs tokens; the remote authentication service owns
//! the signing keys. This configuration describes how to *verify* tokens
//! that service has issued.

use serde::{Deserialize, Serialize};
use std::env;

/// Supported verification algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum JwtAlgorithm {
    /// Symmetric HMAC-SHA256 (shared secret)
    HS256,
    /// Asymmetric RSA-SHA256 (public key only on the gateway side)
    RS256,
}

impl std::str::FromStr for JwtAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HS256" => Ok(JwtAlgorithm::HS256),
            "RS256" => Ok(JwtAlgorithm::RS256),
            _ => Err(format!("Unsupported JWT algorithm: {}", s)),
        }
    }
}

/// JWT validation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Verification algorithm (default: HS256)
    pub algorithm: JwtAlgorithm,

    /// Shared secret (HS256) or public key PEM (RS256)
    pub verification_key: String,

    /// Clock-skew leeway applied to `exp`/`nbf` checks, in seconds
    pub leeway_seconds: u64,
}

impl JwtConfig {
    /// Create a configuration for a symmetric secret
    pub fn hs256(secret: impl Into<String>) -> Self {
        Self {
            algorithm: JwtAlgorithm::HS256,
            verification_key: secret.into(),
            leeway_seconds: default_leeway(),
        }
    }

    /// Create a configuration for an RSA public key in PEM form
    pub fn rs256(public_key_pem: impl Into<String>) -> Self {
        Self {
            algorithm: JwtAlgorithm::RS256,
            verification_key: public_key_pem.into(),
            leeway_seconds: default_leeway(),
        }
    }

    /// Override the clock-skew leeway
    pub fn with_leeway_seconds(mut self, leeway: u64) -> Self {
        self.leeway_seconds = leeway;
        self
    }

    /// Load from `JWT_ALGORITHM`, `JWT_VERIFICATION_KEY` and `JWT_LEEWAY_SECONDS`.
    ///
    /// The verification key is required; the gateway cannot authenticate
    /// any request without it.
    pub fn from_env() -> Result<Self, String> {
        let algorithm = env::var("JWT_ALGORITHM")
            .unwrap_or_else(|_| String::from("HS256"))
            .parse::<JwtAlgorithm>()?;

        let verification_key = env::var("JWT_VERIFICATION_KEY")
            .map_err(|_| String::from("JWT_VERIFICATION_KEY is not set"))?;

        let leeway_seconds = env::var("JWT_LEEWAY_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_leeway);

        Ok(Self {
            algorithm,
            verification_key,
            leeway_seconds,
        })
    }
}

fn default_leeway() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hs256_defaults() {
        let config = JwtConfig::hs256("secret");
        assert_eq!(config.algorithm, JwtAlgorithm::HS256);
        assert_eq!(config.leeway_seconds, 10);
    }

    #[test]
    fn algorithm_parsing_is_case_insensitive() {
        assert_eq!("hs256".parse::<JwtAlgorithm>().unwrap(), JwtAlgorithm::HS256);
        assert_eq!("Rs256".parse::<JwtAlgorithm>().unwrap(), JwtAlgorithm::RS256);
        assert!("ES256".parse::<JwtAlgorithm>().is_err());
    }
}
