//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Token validity window (30 days)
pub const TOKEN_VALIDITY_DAYS: i64 = 30;

/// Claims structure for the JWT payload.
///
/// The payload field is named `id` (rather than the registered `sub` claim)
/// to stay byte-compatible with the assertions already circulating between
/// services. `iat` and `exp` are the standard timestamp claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub id: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user, valid for the standard window
    /// starting now.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::with_validity_days(user_id, TOKEN_VALIDITY_DAYS)
    }

    /// Creates new claims with an explicit validity window in days
    pub fn with_validity_days(user_id: impl Into<String>, days: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::days(days);

        Self {
            id: user_id.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Checks if the claims are still within their validity window
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }

    /// Gets the user identifier from the claims
    pub fn user_id(&self) -> &str {
        &self.id
    }
}
