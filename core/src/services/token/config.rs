//! Configuration for the token service

use ch_shared::config::{JwtConfig, DEFAULT_JWT_SECRET};
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::TOKEN_VALIDITY_DAYS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token validity in days
    pub token_validity_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            token_validity_days: TOKEN_VALIDITY_DAYS,
        }
    }
}

impl TokenServiceConfig {
    /// Check if the configured secret is the built-in fallback
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

/// Bridge from the shared configuration layer.
///
/// Only HS256 is supported; the `algorithm` string in `JwtConfig` exists for
/// forward compatibility and anything unrecognized falls back to HS256.
impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            algorithm: Algorithm::HS256,
            token_validity_days: config.token_validity_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TokenServiceConfig::default();
        assert_eq!(config.algorithm, Algorithm::HS256);
        assert_eq!(config.token_validity_days, 30);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_from_jwt_config() {
        let jwt_config = JwtConfig::new("configured-secret").with_validity_days(7);
        let config = TokenServiceConfig::from(&jwt_config);

        assert_eq!(config.jwt_secret, "configured-secret");
        assert_eq!(config.token_validity_days, 7);
        assert!(!config.is_using_default_secret());
    }
}
