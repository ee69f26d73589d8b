//! Application factory.
//!
//! Builds the Actix-web application from the shared state: middleware, JSON
//! extractor configuration, and the route table.

use actix_web::{error::InternalError, middleware::Logger, web, App, HttpRequest, HttpResponse};

use fs_core::repositories::UserRepository;
use fs_core::services::verification::{CodeStore, SmsSender};
use fs_shared::types::response::ErrorResponse;

use crate::handlers::error::malformed_response;
use crate::i18n::Language;
use crate::middleware::{create_cors, SecurityHeaders};
use crate::routes::auth::{request_code::request_code, verify_code::verify_code, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<C, S, U>(
    app_state: web::Data<AppState<C, S, U>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    C: CodeStore + 'static,
    S: SmsSender + 'static,
    U: UserRepository + 'static,
{
    let environment = app_state.config.environment;

    // Unreadable or incomplete JSON bodies are malformed input: rejected
    // before any store access, same shape as every other failure
    let json_config = web::JsonConfig::default().error_handler(|err, req| {
        let response = malformed_response(Language::from_request(req));
        InternalError::from_response(err, response).into()
    });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(Logger::default())
        .wrap(create_cors(environment))
        .wrap(SecurityHeaders::new(environment))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/request-code", web::post().to(request_code::<C, S, U>))
                    .route("/verify-code", web::post().to(verify_code::<C, S, U>)),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "foodsave-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> HttpResponse {
    let lang = Language::from_request(&req);
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        lang.pick("The requested resource was not found", "Ресурс не найден"),
    ))
}
