//! Authentication endpoint request/response bodies

use serde::{Deserialize, Serialize};
use validator::Validate;

use fs_core::domain::entities::user::User;

/// Body of `POST /api/v1/auth/request-code`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestCodeRequest {
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
}

/// Body of `POST /api/v1/auth/verify-code`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
}

/// Success body for code issuance.
///
/// `code` is populated only in development configurations, where the client
/// displays it instead of receiving an SMS. Production responses never
/// include it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestCodeResponse {
    pub success: bool,
    pub message: String,
    pub expires_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Success body for code verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub success: bool,
    pub user: User,
    pub token: String,
    pub expires_in: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_phone_fails_validation() {
        let request = RequestCodeRequest {
            phone: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_code_fails_validation() {
        let request = VerifyCodeRequest {
            phone: "+998901234567".to_string(),
            code: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_valid_requests_pass() {
        let request = VerifyCodeRequest {
            phone: "+998901234567".to_string(),
            code: "482913".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_code_omitted_from_json_when_absent() {
        let response = RequestCodeResponse {
            success: true,
            message: "Код отправлен".to_string(),
            expires_in: 300,
            code: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("code").is_none());
    }
}
