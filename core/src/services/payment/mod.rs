//! Payment facade module
//!
//! Role-gated forwarding layer in front of the remote payment service:
//! - Bank card registration (payment-token issuance)
//! - Company bank account registration
//! - P2B (card -> account) transfers

mod service;

#[cfg(test)]
mod tests;

pub use service::PaymentService;
