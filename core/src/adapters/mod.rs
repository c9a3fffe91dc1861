//! Adapter capability traits for the remote microservices.
//!
//! Implementations live outside this crate and own the message-queue
//! transport; the services here only hold them behind `Arc` and await
//! their round trips.

mod auth;
mod payment;

pub use auth::AuthAdapter;
pub use payment::PaymentAdapter;
