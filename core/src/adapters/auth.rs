//! Authentication adapter trait.

use async_trait::async_trait;

use crate::domain::entities::TokenPair;
use crate::domain::value_objects::{LoginRequest, OperationResult, RefreshRequest, RegisterRequest};
use crate::errors::DomainResult;

/// Capability contract for the remote authentication service.
///
/// The production implementation bridges these calls over a message-queue
/// RPC exchange; it is responsible for input enforcement, error mapping
/// from remote status codes, and its own concurrency safety. The facade
/// forwards to it verbatim and surfaces whatever it returns.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use al_core::adapters::AuthAdapter;
/// use al_core::domain::{LoginRequest, OperationResult, RefreshRequest, RegisterRequest, TokenPair};
/// use al_core::errors::DomainResult;
///
/// struct AmqpAuthAdapter {
///     // connection handle, exchange name, rpc timeout
/// }
///
/// #[async_trait]
/// impl AuthAdapter for AmqpAuthAdapter {
///     async fn login(&self, request: LoginRequest) -> DomainResult<TokenPair> {
///         // publish to AUTH.login, await the correlated reply
///         unimplemented!()
///     }
///
///     async fn refresh(&self, request: RefreshRequest) -> DomainResult<TokenPair> {
///         unimplemented!()
///     }
///
///     async fn register(&self, request: RegisterRequest) -> DomainResult<OperationResult> {
///         unimplemented!()
///     }
/// }
/// ```
#[async_trait]
pub trait AuthAdapter: Send + Sync {
    /// Verify credentials against the remote service and obtain a token pair.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidCredentials` - credentials rejected (remote 401)
    /// * `DomainError::NotFound` - remote source missing (remote 404)
    /// * `AdapterError::Timeout` / `AdapterError::Unreachable` - transport failures
    async fn login(&self, request: LoginRequest) -> DomainResult<TokenPair>;

    /// Exchange a refresh token for a fresh token pair.
    ///
    /// # Errors
    ///
    /// * `TokenError::TokenExpired` / `TokenError::InvalidTokenFormat` - token rejected
    /// * `AdapterError::Timeout` / `AdapterError::Unreachable` - transport failures
    async fn refresh(&self, request: RefreshRequest) -> DomainResult<TokenPair>;

    /// Create a new account.
    ///
    /// Domain-level registration failures (duplicate account, rejected
    /// fields) are reported inside the returned [`OperationResult`];
    /// `Err` is reserved for transport failures.
    async fn register(&self, request: RegisterRequest) -> DomainResult<OperationResult>;
}
