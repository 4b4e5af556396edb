//! Main token service implementation

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::warn;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWT identity assertions.
///
/// Both operations are synchronous, stateless transformations; the signing
/// keys are derived once at construction and the service can be shared
/// freely across threads.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration (injected; this service
    ///   never reads the process environment itself)
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed token for a user identifier.
    ///
    /// The identifier is embedded as the `id` claim with the configured
    /// validity window. No format validation is performed on the identifier;
    /// that is the caller's responsibility.
    ///
    /// When the service is running on the built-in fallback secret, every
    /// issuance logs a warning.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact JWT
    /// * `Err(DomainError)` - Signing failed (not expected for HS256)
    pub fn issue_token(&self, user_id: &str) -> DomainResult<String> {
        if self.config.is_using_default_secret() {
            warn!("JWT_SECRET is not configured; issuing tokens with the built-in development secret");
        }

        let claims = Claims::with_validity_days(user_id, self.config.token_validity_days);
        self.encode_claims(&claims)
    }

    /// Verifies a token and returns the claims, differentiating failures.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The validated claims
    /// * `Err(DomainError)` - Expired, bad signature, or malformed token
    pub fn decode_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::InvalidTokenFormat,
                }
            })?;

        // Belt-and-braces expiry check without the library's leeway
        if !token_data.claims.is_valid() {
            return Err(TokenError::TokenExpired.into());
        }

        Ok(token_data.claims)
    }

    /// Verifies a token, collapsing every failure mode to `None`.
    ///
    /// This is the surface consumed by request middleware: callers only
    /// learn whether the assertion is trustworthy, never why it was not.
    pub fn verify_token(&self, token: &str) -> Option<Claims> {
        self.decode_token(token).ok()
    }

    /// Encodes claims into a JWT token
    pub(crate) fn encode_claims(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }
}
