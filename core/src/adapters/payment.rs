//! Payment adapter trait.

use async_trait::async_trait;

use crate::domain::value_objects::{
    AddBankAccountRequest, AddBankCardRequest, BankAccountAdded, BankCardAdded,
    P2bTransferReceipt, P2bTransferRequest,
};
use crate::errors::DomainResult;

/// Capability contract for the remote payment service.
///
/// Access control is not this trait's concern; [`PaymentService`] gates
/// every call on the caller's access token before forwarding here.
///
/// [`PaymentService`]: crate::services::payment::PaymentService
#[async_trait]
pub trait PaymentAdapter: Send + Sync {
    /// Register a bank card and obtain a payment token for it.
    async fn add_bank_card(&self, request: AddBankCardRequest) -> DomainResult<BankCardAdded>;

    /// Register a company bank account.
    async fn add_bank_account(
        &self,
        request: AddBankAccountRequest,
    ) -> DomainResult<BankAccountAdded>;

    /// Execute a card-to-account transfer.
    ///
    /// The `payment_token` identifies the source card; it was issued by
    /// [`add_bank_card`](PaymentAdapter::add_bank_card) and rides with the
    /// request on the wire.
    async fn p2b_transfer(
        &self,
        request: P2bTransferRequest,
        payment_token: &str,
    ) -> DomainResult<P2bTransferReceipt>;
}
