//! Gateway services: thin forwarding facades plus local token validation.

pub mod auth;
pub mod payment;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use payment::PaymentService;
pub use token::{TokenValidator, TokenValidatorConfig};
