//! Domain error to HTTP response mapping.
//!
//! Every failure reason maps to a stable machine-readable code plus a
//! localized human-readable message. The codes are part of the client
//! contract: the app branches on them to decide between re-requesting a code
//! and re-prompting for the existing one, so no two reasons share a code.

use actix_web::HttpResponse;

use fs_core::errors::{AuthError, DomainError};
use fs_shared::types::response::ErrorResponse;

use crate::i18n::Language;

/// Response for requests whose body is missing or unreadable.
///
/// Used both by the JSON extractor error handler and by DTO validation, so
/// a missing field and an unparsable body look the same to the client.
pub fn malformed_response(lang: Language) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "MALFORMED",
        lang.pick("Invalid request data", "Неверные данные"),
    ))
}

/// Map a domain error onto its HTTP status, stable code, and localized text
pub fn domain_error_response(error: DomainError, lang: Language) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidPhoneFormat { phone } => {
                HttpResponse::BadRequest().json(ErrorResponse::new(
                    "INVALID_PHONE_FORMAT",
                    lang.pick(
                        &format!("Invalid phone number format: {}", phone),
                        &format!("Неверный формат номера телефона: {}", phone),
                    ),
                ))
            }
            AuthError::CodeNotFound => HttpResponse::BadRequest().json(ErrorResponse::new(
                "CODE_NOT_FOUND",
                lang.pick(
                    "Code not found. Please request a new code.",
                    "Код не найден. Запросите новый код.",
                ),
            )),
            AuthError::CodeExpired => HttpResponse::BadRequest().json(ErrorResponse::new(
                "CODE_EXPIRED",
                lang.pick(
                    "Code has expired. Please request a new code.",
                    "Код истек. Запросите новый код.",
                ),
            )),
            AuthError::AttemptsExceeded => HttpResponse::BadRequest().json(ErrorResponse::new(
                "ATTEMPTS_EXCEEDED",
                lang.pick(
                    "Too many attempts. Please request a new code.",
                    "Превышено количество попыток. Запросите новый код.",
                ),
            )),
            AuthError::InvalidCode => HttpResponse::BadRequest().json(ErrorResponse::new(
                "INVALID_CODE",
                lang.pick("Invalid code", "Неверный код"),
            )),
            AuthError::SmsServiceFailure => {
                HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
                    "SMS_SERVICE_FAILURE",
                    lang.pick(
                        "Could not send the code. Please try again later.",
                        "Не удалось отправить код. Попробуйте позже.",
                    ),
                ))
            }
        },
        DomainError::Token(token_error) => {
            // Signing faults during login are internal; nothing for the
            // client to correct
            log::error!("Token error during verification: {:?}", token_error);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "INTERNAL_ERROR",
                lang.pick(
                    "Verification failed. Please try again later.",
                    "Ошибка верификации. Попробуйте позже.",
                ),
            ))
        }
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => malformed_response(lang),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "NOT_FOUND",
            lang.pick(
                &format!("{} not found", resource),
                &format!("{} не найдено", resource),
            ),
        )),
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "INTERNAL_ERROR",
                lang.pick(
                    "Verification failed. Please try again later.",
                    "Ошибка верификации. Попробуйте позже.",
                ),
            ))
        }
    }
}
