//! Authentication configuration

use serde::{Deserialize, Serialize};

use crate::config::environment::Environment;
use crate::errors::ConfigError;

/// Built-in signing secret used when `JWT_SECRET` is not provided.
///
/// Known weakness carried over from the original deployment: issuing tokens
/// under this value is permitted outside production, but every issuance logs
/// a warning. `AuthConfig::validate` rejects it for production.
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Token validity window in days
pub const DEFAULT_TOKEN_VALIDITY_DAYS: i64 = 30;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token validity window in days
    pub token_validity_days: i64,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            token_validity_days: DEFAULT_TOKEN_VALIDITY_DAYS,
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token validity in days
    pub fn with_validity_days(mut self, days: i64) -> Self {
        self.token_validity_days = days;
        self
    }

    /// Check if using the built-in default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables.
    ///
    /// Reads `JWT_SECRET` (falls back to the built-in default when unset)
    /// and `JWT_TOKEN_VALIDITY_DAYS` (falls back to 30).
    pub fn from_env() -> Self {
        let jwt_secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let token_validity_days = std::env::var("JWT_TOKEN_VALIDITY_DAYS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_VALIDITY_DAYS.to_string())
            .parse()
            .unwrap_or(DEFAULT_TOKEN_VALIDITY_DAYS);

        Self {
            jwt: JwtConfig {
                secret: jwt_secret,
                token_validity_days,
                algorithm: default_algorithm(),
            },
        }
    }

    /// Reject configurations that are unsafe for the given environment.
    ///
    /// The built-in fallback secret is tolerated (with warnings at issuance
    /// time) everywhere except production.
    pub fn validate(&self, environment: Environment) -> Result<(), ConfigError> {
        if environment.is_production() && self.jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultSecretNotAllowed {
                environment: environment.to_string(),
            });
        }
        if self.jwt.token_validity_days <= 0 {
            return Err(ConfigError::InvalidValue {
                field: String::from("token_validity_days"),
                message: format!("must be positive, got {}", self.jwt.token_validity_days),
            });
        }
        Ok(())
    }

    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
        }
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}
