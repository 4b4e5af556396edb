//! Shared utilities and common types for CourseHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types and response structures
//! - Environment detection

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, Environment, JwtConfig};
pub use errors::{ConfigError, ErrorResponse};
