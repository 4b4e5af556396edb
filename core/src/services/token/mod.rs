//! Token service module for JWT management
//!
//! This module handles token-related operations:
//! - JWT issuance for a user identifier
//! - Token verification (signature + expiry)

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
