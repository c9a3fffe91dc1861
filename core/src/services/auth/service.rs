//! Authentication facade implementation

use std::sync::Arc;

use crate::adapters::AuthAdapter;
use crate::domain::entities::{Claims, TokenPair, TokenType};
use crate::domain::value_objects::{LoginRequest, OperationResult, RefreshRequest, RegisterRequest};
use crate::errors::{DomainError, DomainResult};
use crate::services::token::TokenValidator;

/// Thin facade over the remote authentication service.
///
/// Each operation forwards its argument to the configured [`AuthAdapter`]
/// and returns the adapter's result or failure unchanged: no retry, no
/// caching, no error translation and no local side effects. The facade
/// only adds a fail-fast configuration check so a missing adapter
/// surfaces as a diagnosable error rather than a wiring fault.
///
/// The facade is `Send + Sync` and safe to share across request handlers
/// as long as the adapter is; it holds nothing but immutable `Arc`s.
pub struct AuthService<A: AuthAdapter> {
    /// Adapter bridging to the remote authentication service
    adapter: Option<Arc<A>>,
    /// Local validator for access tokens the remote service issued
    token_validator: Option<Arc<TokenValidator>>,
}

impl<A: AuthAdapter> AuthService<A> {
    /// Create a new authentication facade
    ///
    /// # Arguments
    ///
    /// * `adapter` - Adapter for the remote authentication service
    pub fn new(adapter: Arc<A>) -> Self {
        Self {
            adapter: Some(adapter),
            token_validator: None,
        }
    }

    /// Create a facade that can also verify access tokens locally
    ///
    /// # Arguments
    ///
    /// * `adapter` - Adapter for the remote authentication service
    /// * `token_validator` - Validator for locally checking issued tokens
    pub fn with_token_validator(adapter: Arc<A>, token_validator: Arc<TokenValidator>) -> Self {
        Self {
            adapter: Some(adapter),
            token_validator: Some(token_validator),
        }
    }

    /// Create a facade with no adapter wired in.
    ///
    /// Every forwarding operation on such a facade fails fast with
    /// `DomainError::Configuration`. Useful when the gateway must come up
    /// with the upstream intentionally disabled.
    pub fn unconfigured() -> Self {
        Self {
            adapter: None,
            token_validator: None,
        }
    }

    fn adapter(&self) -> DomainResult<&Arc<A>> {
        self.adapter.as_ref().ok_or_else(|| DomainError::Configuration {
            message: String::from("authentication adapter is not configured"),
        })
    }

    /// Log in a user with the provided credentials.
    ///
    /// Forwards the request to the adapter untouched. Identifier and
    /// password enforcement is the remote service's responsibility; the
    /// adapter's error (invalid credentials, unreachable source) reaches
    /// the caller unmodified.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Access and refresh tokens with a type tag
    /// * `Err(DomainError)` - Whatever the adapter raised
    pub async fn login(&self, request: LoginRequest) -> DomainResult<TokenPair> {
        let adapter = self.adapter()?;
        tracing::debug!("forwarding login to authentication service");

        adapter.login(request).await.map_err(|e| {
            tracing::warn!(error = %e, "login rejected by authentication service");
            e
        })
    }

    /// Exchange a refresh token for a new token pair.
    ///
    /// The token rides through as an opaque string; the remote service
    /// decides whether it is valid, expired or revoked.
    pub async fn refresh(&self, request: RefreshRequest) -> DomainResult<TokenPair> {
        let adapter = self.adapter()?;
        tracing::debug!("forwarding token refresh to authentication service");

        adapter.refresh(request).await.map_err(|e| {
            tracing::warn!(error = %e, "refresh rejected by authentication service");
            e
        })
    }

    /// Register a new account.
    ///
    /// Domain-level registration failures come back inside the returned
    /// [`OperationResult`]; callers branch on its `success` flag instead
    /// of matching on `Err`, which is reserved for transport failures.
    pub async fn register(&self, request: RegisterRequest) -> DomainResult<OperationResult> {
        let adapter = self.adapter()?;
        tracing::debug!("forwarding registration to authentication service");

        let outcome = adapter.register(request).await.map_err(|e| {
            tracing::warn!(error = %e, "registration failed to reach authentication service");
            e
        })?;

        if !outcome.success {
            tracing::debug!(
                status = outcome.status_code,
                "registration declined by authentication service"
            );
        }
        Ok(outcome)
    }

    /// Verify an access token locally and return its claims.
    ///
    /// # Errors
    ///
    /// * `DomainError::Configuration` - no token validator was attached
    /// * `DomainError::Token` - token expired, malformed or of the wrong type
    pub fn verify_access(&self, access_token: &str) -> DomainResult<Claims> {
        let validator =
            self.token_validator
                .as_ref()
                .ok_or_else(|| DomainError::Configuration {
                    message: String::from("token validator is not configured"),
                })?;

        validator.validate(access_token, TokenType::Access)
    }
}
