//! Request and response value objects passed through the gateway.
//!
//! These carry caller input to the adapters and adapter results back to
//! the caller. The facade services forward them untouched; the `Validate`
//! implementations are for the layers that construct them.

mod auth;
mod payment;

pub use auth::{LoginRequest, OperationResult, RefreshRequest, RegisterRequest};
pub use payment::{
    AddBankAccountRequest, AddBankCardRequest, BankAccountAdded, BankCardAdded,
    P2bTransferReceipt, P2bTransferRequest,
};
