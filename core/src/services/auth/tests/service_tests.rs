//! Unit tests for the authentication facade

use std::sync::Arc;

use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use crate::domain::entities::{Claims, Role, TokenPair, TokenType};
use crate::domain::value_objects::{LoginRequest, OperationResult, RefreshRequest, RegisterRequest};
use crate::errors::{AdapterError, AuthError, DomainError, TokenError};
use crate::services::auth::AuthService;
use crate::services::token::{TokenValidator, TokenValidatorConfig};

use super::mocks::{StubAuthAdapter, StubFailure};

fn login_request() -> LoginRequest {
    LoginRequest::with_email("driver@autolink.kz", "secret")
}

fn register_request() -> RegisterRequest {
    RegisterRequest {
        first_name: String::from("Aigerim"),
        last_name: String::from("Satpayeva"),
        email: String::from("aigerim@autolink.kz"),
        phone_number: String::from("+77011234567"),
        password: String::from("secret"),
        roles: vec![Role::User],
    }
}

#[tokio::test]
async fn login_returns_adapter_result_verbatim() {
    let adapter = Arc::new(StubAuthAdapter::returning(TokenPair::with_token_type(
        "a", "r", "bearer",
    )));
    let service = AuthService::new(adapter.clone());

    let pair = service.login(login_request()).await.unwrap();

    assert_eq!(pair.access_token, "a");
    assert_eq!(pair.refresh_token, "r");
    assert_eq!(pair.token_type, "bearer");
    // The request reached the adapter unmodified.
    let seen = adapter.seen_logins.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].email.as_deref(), Some("driver@autolink.kz"));
    assert_eq!(seen[0].password, "secret");
}

#[tokio::test]
async fn login_propagates_invalid_credentials_unchanged() {
    let adapter = Arc::new(StubAuthAdapter::failing(StubFailure::InvalidCredentials));
    let service = AuthService::new(adapter);

    let err = service.login(login_request()).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert_eq!(err.to_string(), "Invalid credentials provided.");
}

#[tokio::test]
async fn login_propagates_transport_failures_unchanged() {
    let adapter = Arc::new(StubAuthAdapter::failing(StubFailure::Unreachable));
    let service = AuthService::new(adapter);

    let err = service.login(login_request()).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Adapter(AdapterError::Unreachable { .. })
    ));
}

#[tokio::test]
async fn refresh_forwards_opaque_token() {
    let adapter = Arc::new(StubAuthAdapter::returning(TokenPair::new("a2", "r2")));
    let service = AuthService::new(adapter.clone());

    let pair = service
        .refresh(RefreshRequest::new("opaque-refresh-token"))
        .await
        .unwrap();

    assert_eq!(pair.access_token, "a2");
    let seen = adapter.seen_refreshes.lock().unwrap();
    assert_eq!(seen[0].refresh_token, "opaque-refresh-token");
}

#[tokio::test]
async fn refresh_propagates_adapter_error_kind_and_message() {
    let adapter = Arc::new(StubAuthAdapter::failing(StubFailure::InvalidCredentials));
    let service = AuthService::new(adapter);

    let err = service
        .refresh(RefreshRequest::new("whatever"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn refresh_propagates_expired_token() {
    let adapter = Arc::new(StubAuthAdapter::failing(StubFailure::TokenExpired));
    let service = AuthService::new(adapter);

    let err = service
        .refresh(RefreshRequest::new("stale"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

#[tokio::test]
async fn register_returns_business_failure_as_ok() {
    let adapter = Arc::new(
        StubAuthAdapter::returning(TokenPair::new("a", "r")).with_register_outcome(
            OperationResult::failed(409, "Account already exists."),
        ),
    );
    let service = AuthService::new(adapter);

    // Business failure is data, not an error.
    let outcome = service.register(register_request()).await.unwrap();
    assert!(!outcome.success);
    assert_eq!(outcome.status_code, 409);
    assert_eq!(outcome.message.as_deref(), Some("Account already exists."));
}

#[tokio::test]
async fn register_success_outcome() {
    let adapter = Arc::new(StubAuthAdapter::returning(TokenPair::new("a", "r")));
    let service = AuthService::new(adapter);

    let outcome = service.register(register_request()).await.unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.status_code, 201);
}

#[tokio::test]
async fn register_transport_failure_is_err() {
    let adapter = Arc::new(StubAuthAdapter::failing(StubFailure::Timeout));
    let service = AuthService::new(adapter);

    let err = service.register(register_request()).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Adapter(AdapterError::Timeout { .. })
    ));
}

#[tokio::test]
async fn unconfigured_facade_fails_fast_on_every_operation() {
    let service: AuthService<StubAuthAdapter> = AuthService::unconfigured();

    let login_err = service.login(login_request()).await.unwrap_err();
    assert!(matches!(login_err, DomainError::Configuration { .. }));

    let refresh_err = service
        .refresh(RefreshRequest::new("token"))
        .await
        .unwrap_err();
    assert!(matches!(refresh_err, DomainError::Configuration { .. }));

    let register_err = service.register(register_request()).await.unwrap_err();
    assert!(matches!(register_err, DomainError::Configuration { .. }));
}

#[tokio::test]
async fn verify_access_requires_validator() {
    let adapter = Arc::new(StubAuthAdapter::returning(TokenPair::new("a", "r")));
    let service = AuthService::new(adapter);

    let err = service.verify_access("some-token").unwrap_err();
    assert!(matches!(err, DomainError::Configuration { .. }));
}

#[tokio::test]
async fn verify_access_accepts_locally_valid_token() {
    const SECRET: &str = "gateway-test-secret";

    let adapter = Arc::new(StubAuthAdapter::returning(TokenPair::new("a", "r")));
    let validator =
        Arc::new(TokenValidator::new(TokenValidatorConfig::hs256(SECRET)).unwrap());
    let service = AuthService::with_token_validator(adapter, validator);

    let claims = Claims::new(Uuid::new_v4(), TokenType::Access, vec![Role::User], 900);
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let decoded = service.verify_access(&token).unwrap();
    assert_eq!(decoded.sub, claims.sub);
    assert!(decoded.has_role(Role::User));

    // Refresh tokens are not accepted here.
    let refresh_claims = Claims::new(Uuid::new_v4(), TokenType::Refresh, vec![], 900);
    let refresh_token = encode(
        &Header::default(),
        &refresh_claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();
    let err = service.verify_access(&refresh_token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::WrongTokenType { .. })
    ));
}

#[tokio::test]
async fn facade_is_shareable_across_tasks() {
    let adapter = Arc::new(StubAuthAdapter::returning(TokenPair::new("a", "r")));
    let service = Arc::new(AuthService::new(adapter));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service.login(login_request()).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
}
