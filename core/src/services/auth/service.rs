//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::value_objects::AuthResponse;
use crate::errors::DomainResult;
use crate::repositories::UserRepository;
use crate::services::token::TokenService;
use crate::services::verification::{CodeStore, SmsSender, VerificationService};
use crate::services::verification::IssuedCode;
use fs_shared::utils::phone::{mask_phone, normalize_phone};

/// Orchestrates the full login flow: issue a code, verify a submission, then
/// exchange the accepted code for a user profile and a session credential.
pub struct AuthService<C, S, U>
where
    C: CodeStore,
    S: SmsSender,
    U: UserRepository,
{
    verification_service: Arc<VerificationService<S, C>>,
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
}

impl<C, S, U> AuthService<C, S, U>
where
    C: CodeStore,
    S: SmsSender,
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(
        verification_service: Arc<VerificationService<S, C>>,
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            verification_service,
            user_repository,
            token_service,
        }
    }

    /// Issue a verification code for `phone`.
    ///
    /// Delegates to the verification service; re-requesting overwrites any
    /// outstanding code for the number.
    pub async fn request_code(&self, phone: &str) -> DomainResult<IssuedCode> {
        self.verification_service.request_code(phone).await
    }

    /// Verify a submitted code and, on success, return the authenticated user
    /// with a fresh session credential.
    ///
    /// The user profile is created lazily on first successful verification;
    /// later logins reuse it unchanged. Expected verification failures pass
    /// through untouched so the presentation layer can report each reason
    /// distinctly.
    pub async fn verify_code(&self, phone: &str, code: &str) -> DomainResult<AuthResponse> {
        let phone = normalize_phone(phone);

        self.verification_service.verify_code(&phone, code).await?;

        let user = self.user_repository.get_or_create(&phone).await?;
        let token = self.token_service.issue_session_token(user.id, &user.phone)?;

        tracing::info!(
            phone = %mask_phone(&phone),
            user_id = %user.id,
            event = "login_succeeded",
            "Issued session credential"
        );

        Ok(AuthResponse::new(
            user,
            token,
            self.token_service.session_expiry_seconds(),
        ))
    }
}
