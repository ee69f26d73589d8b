//! Configuration for the token service

use fs_shared::config::JwtConfig;

use crate::domain::entities::token::SESSION_TOKEN_EXPIRY_DAYS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret used to sign and verify session tokens (HS256)
    pub secret: String,

    /// Session token lifetime in days
    pub expiry_days: i64,
}

impl TokenServiceConfig {
    /// Create a configuration with the given signing secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiry_days: SESSION_TOKEN_EXPIRY_DAYS,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            expiry_days: config.session_token_expiry_days,
        }
    }
}
