//! Payment facade implementation

use std::sync::Arc;

use crate::adapters::PaymentAdapter;
use crate::domain::entities::{Role, TokenType};
use crate::domain::value_objects::{
    AddBankAccountRequest, AddBankCardRequest, BankAccountAdded, BankCardAdded,
    P2bTransferReceipt, P2bTransferRequest,
};
use crate::errors::{DomainError, DomainResult};
use crate::services::token::TokenValidator;

/// Role-gated facade over the remote payment service.
///
/// Unlike the authentication facade, every operation here takes the
/// caller's access token: the gateway verifies it locally and checks the
/// required role before the request crosses the wire. Past that gate the
/// forwarding rules are the same — adapter results and failures pass
/// through unchanged.
pub struct PaymentService<P: PaymentAdapter> {
    /// Adapter bridging to the remote payment service
    adapter: Option<Arc<P>>,
    /// Validator for the access tokens guarding payment operations
    token_validator: Arc<TokenValidator>,
}

impl<P: PaymentAdapter> PaymentService<P> {
    /// Create a new payment facade
    ///
    /// # Arguments
    ///
    /// * `adapter` - Adapter for the remote payment service
    /// * `token_validator` - Validator for callers' access tokens
    pub fn new(adapter: Arc<P>, token_validator: Arc<TokenValidator>) -> Self {
        Self {
            adapter: Some(adapter),
            token_validator,
        }
    }

    /// Create a facade with no adapter wired in; every operation fails
    /// fast with `DomainError::Configuration`.
    pub fn unconfigured(token_validator: Arc<TokenValidator>) -> Self {
        Self {
            adapter: None,
            token_validator,
        }
    }

    fn adapter(&self) -> DomainResult<&Arc<P>> {
        self.adapter.as_ref().ok_or_else(|| DomainError::Configuration {
            message: String::from("payment adapter is not configured"),
        })
    }

    fn authorize(&self, access_token: &str, required_roles: &[Role]) -> DomainResult<()> {
        let claims = self.token_validator.validate(access_token, TokenType::Access)?;
        self.token_validator.require_roles(&claims, required_roles)
    }

    /// Attach a bank card to the calling user's account.
    ///
    /// Requires an access token carrying [`Role::User`]. On success the
    /// payment service answers with the registered card and a payment
    /// token for later transfers.
    pub async fn add_bank_card(
        &self,
        request: AddBankCardRequest,
        access_token: &str,
    ) -> DomainResult<BankCardAdded> {
        self.authorize(access_token, &[Role::User])?;
        let adapter = self.adapter()?;
        tracing::debug!(user_id = %request.user_id, "forwarding bank card registration");

        adapter.add_bank_card(request).await.map_err(|e| {
            tracing::warn!(error = %e, "bank card registration rejected by payment service");
            e
        })
    }

    /// Attach a bank account to a company.
    ///
    /// Requires an access token carrying [`Role::CssAdmin`].
    pub async fn add_bank_account(
        &self,
        request: AddBankAccountRequest,
        access_token: &str,
    ) -> DomainResult<BankAccountAdded> {
        self.authorize(access_token, &[Role::CssAdmin])?;
        let adapter = self.adapter()?;
        tracing::debug!(company_id = %request.company_id, "forwarding bank account registration");

        adapter.add_bank_account(request).await.map_err(|e| {
            tracing::warn!(error = %e, "bank account registration rejected by payment service");
            e
        })
    }

    /// Execute a P2B (bank card -> bank account) transfer.
    ///
    /// Requires an access token carrying [`Role::User`] plus the payment
    /// token issued when the source card was registered.
    pub async fn p2b_transfer(
        &self,
        request: P2bTransferRequest,
        access_token: &str,
        payment_token: &str,
    ) -> DomainResult<P2bTransferReceipt> {
        self.authorize(access_token, &[Role::User])?;
        let adapter = self.adapter()?;
        tracing::debug!(
            account = %request.bank_account_number,
            "forwarding P2B transfer"
        );

        adapter
            .p2b_transfer(request, payment_token)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "P2B transfer rejected by payment service");
                e
            })
    }
}
