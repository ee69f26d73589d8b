//! Handler for `POST /api/v1/auth/verify-code`

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use fs_core::repositories::UserRepository;
use fs_core::services::verification::{CodeStore, SmsSender};
use fs_shared::utils::phone::mask_phone;

use crate::dto::auth::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::error::{domain_error_response, malformed_response};
use crate::i18n::Language;

use super::AppState;

/// Verifies a submitted code and signs the user in.
///
/// On success the session credential is returned in the body and set as an
/// HttpOnly, SameSite=Lax cookie with a 7-day max age (`Secure` in
/// production). Each failure reason carries its own stable error code so the
/// client can decide whether to re-request a code or re-prompt for the
/// existing one.
pub async fn verify_code<C, S, U>(
    req: HttpRequest,
    state: web::Data<AppState<C, S, U>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    C: CodeStore + 'static,
    S: SmsSender + 'static,
    U: UserRepository + 'static,
{
    let lang = Language::from_request(&req);

    if request.validate().is_err() {
        return malformed_response(lang);
    }

    log::info!(
        "Processing verify-code for phone: {}",
        mask_phone(&request.phone)
    );

    match state
        .auth_service
        .verify_code(&request.phone, &request.code)
        .await
    {
        Ok(auth) => {
            let session = &state.config.session;
            let cookie = Cookie::build(session.cookie_name.clone(), auth.token.clone())
                .path("/")
                .http_only(session.http_only)
                .secure(session.secure)
                .same_site(SameSite::Lax)
                .max_age(CookieDuration::seconds(auth.expires_in))
                .finish();

            HttpResponse::Ok().cookie(cookie).json(VerifyCodeResponse {
                success: true,
                user: auth.user,
                token: auth.token,
                expires_in: auth.expires_in,
                message: lang.pick("Signed in", "Успешный вход").to_string(),
            })
        }
        Err(error) => domain_error_response(error, lang),
    }
}
