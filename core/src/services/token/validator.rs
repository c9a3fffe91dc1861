//! JWT validator implementation

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::domain::entities::{Claims, Role, TokenType};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenValidatorConfig;

/// Validates JWTs issued by the remote authentication service.
///
/// Checks the signature, expiry (with clock-skew leeway) and the embedded
/// `token_type` claim. Role checks are a separate step so callers can
/// decide which operations are gated.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl TokenValidator {
    /// Creates a new validator from configuration
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if an RS256 key PEM cannot be
    /// parsed or the algorithm is not supported for validation.
    pub fn new(config: TokenValidatorConfig) -> DomainResult<Self> {
        let decoding_key = match config.algorithm {
            Algorithm::HS256 => DecodingKey::from_secret(config.verification_key.as_bytes()),
            Algorithm::RS256 => DecodingKey::from_rsa_pem(config.verification_key.as_bytes())
                .map_err(|e| DomainError::Configuration {
                    message: format!("Invalid RS256 public key: {}", e),
                })?,
            other => {
                return Err(DomainError::Configuration {
                    message: format!("Unsupported JWT algorithm: {:?}", other),
                })
            }
        };

        let mut validation = Validation::new(config.algorithm);
        validation.leeway = config.leeway_seconds;
        validation.validate_exp = true;

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    /// Validates a token and checks it is of the required type
    ///
    /// # Arguments
    ///
    /// * `token` - The raw JWT string
    /// * `required_type` - Which kind of token the caller must present
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid and of the right type
    /// * `Err(DomainError::Token)` - Token is expired, malformed, carries a
    ///   bad signature, or is of the wrong type
    pub fn validate(&self, token: &str, required_type: TokenType) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                let token_error = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::ImmatureSignature => {
                        TokenError::TokenNotYetValid
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    jsonwebtoken::errors::ErrorKind::MissingRequiredClaim(claim) => {
                        TokenError::MissingClaim {
                            claim: claim.clone(),
                        }
                    }
                    _ => TokenError::InvalidTokenFormat,
                };
                tracing::warn!(error = %token_error, "token validation failed");
                DomainError::Token(token_error)
            })?;

        let claims = token_data.claims;
        if claims.token_type != required_type {
            tracing::warn!(
                expected = required_type.as_str(),
                actual = claims.token_type.as_str(),
                "token type mismatch"
            );
            return Err(DomainError::Token(TokenError::WrongTokenType {
                expected: required_type.as_str(),
            }));
        }

        Ok(claims)
    }

    /// Checks the claims carry every required role
    ///
    /// # Errors
    ///
    /// Returns `TokenError::InsufficientRole` if any required role is missing.
    pub fn require_roles(&self, claims: &Claims, required: &[Role]) -> DomainResult<()> {
        if required.iter().all(|role| claims.has_role(*role)) {
            Ok(())
        } else {
            tracing::warn!(subject = %claims.sub, "caller lacks a required role");
            Err(DomainError::Token(TokenError::InsufficientRole))
        }
    }
}
