//! Unit tests for the end-to-end authentication flow

use std::sync::Arc;

use crate::errors::{AuthError, DomainError};
use crate::repositories::user::MemoryUserRepository;
use crate::repositories::UserRepository;
use crate::services::auth::AuthService;
use crate::services::token::{TokenService, TokenServiceConfig};
use crate::services::verification::{
    MemoryCodeStore, VerificationService, VerificationServiceConfig,
};

use super::mocks::MockSmsSender;

fn make_auth_service() -> (
    AuthService<MemoryCodeStore, MockSmsSender, MemoryUserRepository>,
    Arc<MemoryUserRepository>,
    Arc<TokenService>,
) {
    let sms = Arc::new(MockSmsSender::new());
    let store = Arc::new(MemoryCodeStore::new());
    let verification = Arc::new(VerificationService::new(
        sms,
        store,
        VerificationServiceConfig::default(),
    ));
    let users = Arc::new(MemoryUserRepository::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new("test-secret")).unwrap());

    (
        AuthService::new(verification, users.clone(), tokens.clone()),
        users,
        tokens,
    )
}

#[tokio::test]
async fn test_full_login_flow() {
    let (auth, users, tokens) = make_auth_service();

    let issued = auth.request_code("+998901234567").await.unwrap();
    let response = auth
        .verify_code("+998901234567", &issued.code)
        .await
        .unwrap();

    assert_eq!(response.user.phone, "+998901234567");
    assert_eq!(response.expires_in, 604800);

    let claims = tokens.verify_session_token(&response.token).unwrap();
    assert_eq!(claims.sub, response.user.id.to_string());
    assert_eq!(claims.phone, "+998901234567");

    // The profile was created lazily by the verification
    let stored = users.find_by_phone("+998901234567").await.unwrap();
    assert_eq!(stored.unwrap().id, response.user.id);
}

#[tokio::test]
async fn test_second_login_reuses_existing_user() {
    let (auth, _, _) = make_auth_service();

    let first_code = auth.request_code("+998901234567").await.unwrap();
    let first = auth
        .verify_code("+998901234567", &first_code.code)
        .await
        .unwrap();

    let second_code = auth.request_code("+998901234567").await.unwrap();
    let second = auth
        .verify_code("+998901234567", &second_code.code)
        .await
        .unwrap();

    assert_eq!(first.user.id, second.user.id);
    // A new credential is minted per login
    assert_ne!(first.token, second.token);
}

#[tokio::test]
async fn test_failed_verification_creates_no_user() {
    let (auth, users, _) = make_auth_service();

    auth.request_code("+998901234567").await.unwrap();
    let result = auth.verify_code("+998901234567", "000000").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCode))
    ));
    assert!(users
        .find_by_phone("+998901234567")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_verification_failures_pass_through() {
    let (auth, _, _) = make_auth_service();

    let result = auth.verify_code("+998901234567", "482913").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::CodeNotFound))
    ));
}

#[tokio::test]
async fn test_phone_is_normalized_before_lookup() {
    let (auth, users, _) = make_auth_service();

    let issued = auth.request_code("+998 90 123 45 67").await.unwrap();
    let response = auth
        .verify_code("+998 90 123 45 67", &issued.code)
        .await
        .unwrap();

    assert_eq!(response.user.phone, "+998901234567");
    assert!(users
        .find_by_phone("+998901234567")
        .await
        .unwrap()
        .is_some());
}
