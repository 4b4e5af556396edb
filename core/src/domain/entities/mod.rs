//! Domain entities

pub mod token;

pub use token::{Claims, TOKEN_VALIDITY_DAYS};
