//! Shared helpers for HTTP-level tests.

use std::sync::Arc;

use actix_web::web;

use fs_api::routes::auth::AppState;
use fs_core::repositories::user::MemoryUserRepository;
use fs_core::services::auth::AuthService;
use fs_core::services::token::{TokenService, TokenServiceConfig};
use fs_core::services::verification::{
    LogSmsSender, MemoryCodeStore, VerificationService, VerificationServiceConfig,
};
use fs_shared::config::{AppConfig, Environment, JwtConfig, ServerConfig, SessionConfig};

pub const TEST_JWT_SECRET: &str = "test-signing-secret";

pub type TestState = web::Data<AppState<MemoryCodeStore, LogSmsSender, MemoryUserRepository>>;

/// Build application state wired with in-memory services
pub fn test_state(environment: Environment, verification: VerificationServiceConfig) -> TestState {
    let store = Arc::new(MemoryCodeStore::new());
    let verification_service = Arc::new(VerificationService::new(
        Arc::new(LogSmsSender),
        store,
        verification,
    ));
    let user_repository = Arc::new(MemoryUserRepository::new());
    let token_service =
        Arc::new(TokenService::new(TokenServiceConfig::new(TEST_JWT_SECRET)).unwrap());
    let auth_service = Arc::new(AuthService::new(
        verification_service,
        user_repository,
        token_service,
    ));

    let config = AppConfig {
        environment,
        server: ServerConfig::default(),
        jwt: JwtConfig::new(TEST_JWT_SECRET),
        session: SessionConfig {
            secure: environment.is_production(),
            ..Default::default()
        },
    };

    web::Data::new(AppState::new(auth_service, config))
}

/// Development-mode state: verification code exposed in responses
pub fn dev_state() -> TestState {
    test_state(
        Environment::Development,
        VerificationServiceConfig::default(),
    )
}
