//! Token validator configuration

use jsonwebtoken::Algorithm;

use al_shared::config::{JwtAlgorithm, JwtConfig};

/// Configuration for [`TokenValidator`](super::TokenValidator)
#[derive(Debug, Clone)]
pub struct TokenValidatorConfig {
    /// Signature algorithm the remote service signs with
    pub algorithm: Algorithm,

    /// Shared secret (HS256) or public key PEM (RS256)
    pub verification_key: String,

    /// Clock-skew leeway applied to `exp` checks, in seconds
    pub leeway_seconds: u64,
}

impl TokenValidatorConfig {
    /// Symmetric-secret configuration with the default 10s leeway
    pub fn hs256(secret: impl Into<String>) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            verification_key: secret.into(),
            leeway_seconds: 10,
        }
    }

    /// Public-key configuration with the default 10s leeway
    pub fn rs256(public_key_pem: impl Into<String>) -> Self {
        Self {
            algorithm: Algorithm::RS256,
            verification_key: public_key_pem.into(),
            leeway_seconds: 10,
        }
    }

    /// Override the clock-skew leeway
    pub fn with_leeway_seconds(mut self, leeway: u64) -> Self {
        self.leeway_seconds = leeway;
        self
    }
}

impl From<&JwtConfig> for TokenValidatorConfig {
    fn from(config: &JwtConfig) -> Self {
        let algorithm = match config.algorithm {
            JwtAlgorithm::HS256 => Algorithm::HS256,
            JwtAlgorithm::RS256 => Algorithm::RS256,
        };
        Self {
            algorithm,
            verification_key: config.verification_key.clone(),
            leeway_seconds: config.leeway_seconds,
        }
    }
}
