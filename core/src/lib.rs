//! # AutoLink Gateway Core
//!
//! Use-case layer of the AutoLink API gateway. This crate contains the
//! domain value objects, the adapter capability traits implemented by the
//! message-queue RPC bridges, the thin forwarding services that sit
//! between the web layer and those adapters, and the error taxonomy the
//! whole gateway speaks.
//!
//! Credential verification, token minting and persistence all live in the
//! remote services behind the adapters; nothing in this crate mutates
//! state beyond the injected adapter references.

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::*;
pub use domain::*;
pub use errors::*;
pub use services::*;
