//! Configuration module for CourseHub server

pub mod auth;
pub mod environment;

pub use auth::{AuthConfig, JwtConfig, DEFAULT_JWT_SECRET};
pub use environment::Environment;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Detected runtime environment
    pub environment: Environment,

    /// Authentication configuration
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Build the application configuration from environment variables.
    ///
    /// This is the single place where process environment is read; every
    /// component receives its configuration explicitly from here.
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            auth: AuthConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            auth: AuthConfig::default(),
        }
    }
}
