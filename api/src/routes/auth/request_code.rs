//! Handler for `POST /api/v1/auth/request-code`

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use fs_core::repositories::UserRepository;
use fs_core::services::verification::{CodeStore, SmsSender};
use fs_shared::utils::phone::mask_phone;

use crate::dto::auth::{RequestCodeRequest, RequestCodeResponse};
use crate::handlers::error::{domain_error_response, malformed_response};
use crate::i18n::Language;

use super::AppState;

/// Issues a one-time verification code for a phone number.
///
/// Re-requesting overwrites any outstanding code for the number and resets
/// its attempt counter. In development configurations the response includes
/// the code itself so the client can display it; production responses never
/// carry it.
pub async fn request_code<C, S, U>(
    req: HttpRequest,
    state: web::Data<AppState<C, S, U>>,
    request: web::Json<RequestCodeRequest>,
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
        "Processing request-code for phone: {}",
        mask_phone(&request.phone)
    );

    match state.auth_service.request_code(&request.phone).await {
        Ok(issued) => {
            let code = state
                .config
                .environment
                .is_development()
                .then_some(issued.code);

            HttpResponse::Ok().json(RequestCodeResponse {
                success: true,
                message: lang.pick("Code sent", "Код отправлен").to_string(),
                expires_in: issued.expires_in,
                code,
            })
        }
        Err(error) => domain_error_response(error, lang),
    }
}
