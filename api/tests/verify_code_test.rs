//! HTTP-level tests for the verify-code endpoint

mod common;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::cookie::SameSite;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test;
use serde_json::json;

use fs_core::services::token::{TokenService, TokenServiceConfig};
use fs_core::services::verification::VerificationServiceConfig;
use fs_shared::config::Environment;

use common::{dev_state, test_state, TEST_JWT_SECRET};
use fs_api::app::create_app;

async fn request_code<S, B>(app: &S, phone: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = test::TestRequest::post()
        .uri("/api/v1/auth/request-code")
        .set_json(json!({"phone": phone}))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(app, request).await).await;
    body["code"].as_str().expect("code exposed in tests").to_string()
}

async fn verify_code<S, B>(app: &S, phone: &str, code: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = test::TestRequest::post()
        .uri("/api/v1/auth/verify-code")
        .set_json(json!({"phone": phone, "code": code}))
        .to_request();
    test::call_service(app, request).await
}

async fn error_code<B: MessageBody>(response: ServiceResponse<B>) -> String {
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    body["error"].as_str().unwrap().to_string()
}

#[actix_rt::test]
async fn test_successful_login_flow() {
    let app = test::init_service(create_app(dev_state())).await;

    let code = request_code(&app, "+998901234567").await;
    let response = verify_code(&app, "+998901234567", &code).await;

    assert!(response.status().is_success());

    let cookie = response
        .response()
        .cookies()
        .find(|c| c.name() == "auth_token")
        .expect("session cookie is set");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(
        cookie.max_age(),
        Some(actix_web::cookie::time::Duration::seconds(604800))
    );

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["phone"], "+998901234567");
    assert_eq!(body["expires_in"], 604800);
    assert_eq!(body["message"], "Успешный вход");

    // The returned credential verifies against the shared secret and binds
    // the user identity and phone
    let token_service =
        TokenService::new(TokenServiceConfig::new(TEST_JWT_SECRET)).unwrap();
    let claims = token_service
        .verify_session_token(body["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.phone, "+998901234567");
    assert_eq!(claims.sub, body["user"]["id"].as_str().unwrap());
}

#[actix_rt::test]
async fn test_code_cannot_be_replayed() {
    let app = test::init_service(create_app(dev_state())).await;

    let code = request_code(&app, "+998901234567").await;
    let response = verify_code(&app, "+998901234567", &code).await;
    assert!(response.status().is_success());

    let response = verify_code(&app, "+998901234567", &code).await;
    assert_eq!(response.status(), 400);
    assert_eq!(error_code(response).await, "CODE_NOT_FOUND");
}

#[actix_rt::test]
async fn test_verify_without_requesting_a_code() {
    let app = test::init_service(create_app(dev_state())).await;

    let response = verify_code(&app, "+998901234567", "482913").await;
    assert_eq!(response.status(), 400);
    assert_eq!(error_code(response).await, "CODE_NOT_FOUND");
}

#[actix_rt::test]
async fn test_wrong_code_attempt_sequence() {
    let app = test::init_service(create_app(dev_state())).await;

    request_code(&app, "+998901234567").await;

    let response = verify_code(&app, "+998901234567", "000000").await;
    assert_eq!(error_code(response).await, "INVALID_CODE");

    let response = verify_code(&app, "+998901234567", "000000").await;
    assert_eq!(error_code(response).await, "INVALID_CODE");

    // The third wrong attempt exhausts and deletes the record
    let response = verify_code(&app, "+998901234567", "000000").await;
    assert_eq!(error_code(response).await, "ATTEMPTS_EXCEEDED");

    let response = verify_code(&app, "+998901234567", "000000").await;
    assert_eq!(error_code(response).await, "CODE_NOT_FOUND");
}

#[actix_rt::test]
async fn test_expired_code_is_rejected() {
    let state = test_state(
        Environment::Development,
        VerificationServiceConfig {
            code_ttl_minutes: 0,
            ..Default::default()
        },
    );
    let app = test::init_service(create_app(state)).await;

    let code = request_code(&app, "+998901234567").await;
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let response = verify_code(&app, "+998901234567", &code).await;
    assert_eq!(response.status(), 400);
    assert_eq!(error_code(response).await, "CODE_EXPIRED");

    // Expiry detection deleted the record
    let response = verify_code(&app, "+998901234567", &code).await;
    assert_eq!(error_code(response).await, "CODE_NOT_FOUND");
}

#[actix_rt::test]
async fn test_missing_fields_are_malformed() {
    let app = test::init_service(create_app(dev_state())).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/auth/verify-code")
        .set_json(json!({"phone": "+998901234567"}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);
    assert_eq!(error_code(response).await, "MALFORMED");

    let request = test::TestRequest::post()
        .uri("/api/v1/auth/verify-code")
        .set_json(json!({"phone": "", "code": ""}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);
    assert_eq!(error_code(response).await, "MALFORMED");
}

#[actix_rt::test]
async fn test_relaxed_validation_accepts_any_code() {
    let state = test_state(
        Environment::Development,
        VerificationServiceConfig {
            relaxed_validation: true,
            ..Default::default()
        },
    );
    let app = test::init_service(create_app(state)).await;

    request_code(&app, "+998901234567").await;
    let response = verify_code(&app, "+998901234567", "000000").await;
    assert!(response.status().is_success());
}

#[actix_rt::test]
async fn test_messages_follow_accept_language() {
    let app = test::init_service(create_app(dev_state())).await;

    let code = request_code(&app, "+998901234567").await;
    let request = test::TestRequest::post()
        .uri("/api/v1/auth/verify-code")
        .insert_header(("Accept-Language", "en-US,en;q=0.9"))
        .set_json(json!({"phone": "+998901234567", "code": code}))
        .to_request();
    let response = test::call_service(&app, request).await;

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Signed in");
}
