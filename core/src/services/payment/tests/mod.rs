//! Tests for the payment facade.

pub mod mocks;
