//! Token error definitions.
//!
//! Verification failures are differentiated here so that middleware can log
//! the reason; the public `verify_token` surface still collapses every
//! failure mode to a single "invalid" outcome.

use ch_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
            TokenError::InvalidTokenFormat => error_codes::INVALID_TOKEN_FORMAT,
            TokenError::InvalidSignature => error_codes::INVALID_SIGNATURE,
            TokenError::TokenGenerationFailed => error_codes::TOKEN_GENERATION_FAILED,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
