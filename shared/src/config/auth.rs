//! Authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_DEV_SECRET: &str = "development-secret-please-change-in-production";

/// JWT session token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing session tokens
    pub secret: String,

    /// Session token lifetime in days
    pub session_token_expiry_days: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_DEV_SECRET),
            session_token_expiry_days: 7,
            issuer: String::from("foodsave"),
            audience: String::from("foodsave-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables (JWT_SECRET / JWT_SESSION_EXPIRY_DAYS)
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| String::from(DEFAULT_DEV_SECRET));
        let session_token_expiry_days = std::env::var("JWT_SESSION_EXPIRY_DAYS")
            .unwrap_or_else(|_| String::from("7"))
            .parse()
            .unwrap_or(7);

        Self {
            secret,
            session_token_expiry_days,
            ..Default::default()
        }
    }

    /// Check if the development fallback secret is still in use.
    /// Production startup must refuse this.
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_DEV_SECRET
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session cookie name
    pub cookie_name: String,

    /// Session cookie secure flag (HTTPS only)
    pub secure: bool,

    /// Session cookie HttpOnly flag
    pub http_only: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("auth_token"),
            secure: false,
            http_only: true,
        }
    }
}
