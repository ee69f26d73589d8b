//! Application configuration, resolved from environment variables.

pub mod auth;
pub mod environment;
pub mod server;

pub use auth::{JwtConfig, SessionConfig};
pub use environment::Environment;
pub use server::ServerConfig;

/// Aggregate application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Which environment the process runs in
    pub environment: Environment,

    /// HTTP server settings
    pub server: ServerConfig,

    /// JWT signing settings
    pub jwt: JwtConfig,

    /// Session cookie settings
    pub session: SessionConfig,
}

impl AppConfig {
    /// Resolve the full configuration from the process environment.
    ///
    /// The session cookie is marked `Secure` automatically when the
    /// environment is production.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let session = SessionConfig {
            secure: environment.is_production(),
            ..Default::default()
        };

        Self {
            environment,
            server: ServerConfig::from_env(),
            jwt: JwtConfig::from_env(),
            session,
        }
    }
}
