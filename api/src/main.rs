use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::{info, warn};
use std::env;
use std::sync::Arc;

use fs_core::repositories::user::MemoryUserRepository;
use fs_core::services::auth::AuthService;
use fs_core::services::token::{TokenService, TokenServiceConfig};
use fs_core::services::verification::{
    LogSmsSender, MemoryCodeStore, VerificationService, VerificationServiceConfig,
};
use fs_shared::config::AppConfig;

use fs_api::app;
use fs_api::routes::auth::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!(
        "Starting FoodSave API server ({} environment)",
        config.environment
    );

    // A production deployment signing sessions with the development fallback
    // secret is a misconfiguration, not something to limp along with
    if config.environment.is_production() && config.jwt.is_using_default_secret() {
        panic!("JWT_SECRET must be set to a non-default value in production");
    }

    let relaxed_validation = parse_relaxed_validation_flag();
    let relaxed_validation = if relaxed_validation && config.environment.is_production() {
        warn!("RELAXED_CODE_VALIDATION is ignored in production");
        false
    } else {
        relaxed_validation
    };
    if relaxed_validation {
        warn!("Relaxed code validation is enabled: any submitted code is accepted");
    }

    let store = Arc::new(MemoryCodeStore::new());
    let sms_sender = Arc::new(LogSmsSender);
    let verification_service = Arc::new(VerificationService::new(
        sms_sender,
        store,
        VerificationServiceConfig {
            relaxed_validation,
            ..Default::default()
        },
    ));

    let user_repository = Arc::new(MemoryUserRepository::new());
    let token_service = Arc::new(
        TokenService::new(TokenServiceConfig::from(&config.jwt))
            .expect("JWT configuration must provide a signing secret"),
    );

    let auth_service = Arc::new(AuthService::new(
        verification_service,
        user_repository,
        token_service,
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let app_state = web::Data::new(AppState::new(auth_service, config));

    HttpServer::new(move || app::create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}

/// Read the development-mode code-comparison bypass flag from the environment
fn parse_relaxed_validation_flag() -> bool {
    env::var("RELAXED_CODE_VALIDATION")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
