//! Common error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes used in API responses
pub mod error_codes {
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const INVALID_TOKEN_FORMAT: &str = "INVALID_TOKEN_FORMAT";
    pub const INVALID_SIGNATURE: &str = "INVALID_SIGNATURE";
    pub const TOKEN_GENERATION_FAILED: &str = "TOKEN_GENERATION_FAILED";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Configuration errors surfaced at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("the built-in development secret is not allowed in {environment}; set JWT_SECRET")]
    DefaultSecretNotAllowed { environment: String },

    #[error("invalid configuration value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Unified error response structure for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}
