//! Domain entities.

pub mod token;

pub use token::{Claims, Role, TokenPair, TokenType, BEARER_TOKEN_TYPE};
