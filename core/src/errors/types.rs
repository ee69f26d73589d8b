//! Domain-specific error types for authentication and related operations
//!
//! This module provides error type definitions for the verification protocol,
//! token management, and validation. The human-readable, localized messages
//! are configured in the presentation layer; these variants carry the stable
//! failure reasons the client branches on.

use thiserror::Error;

/// Authentication-related errors
///
/// The verification failures are mutually exclusive per request: a caller
/// always receives exactly one of them, and uses the distinction to decide
/// between re-requesting a code and re-prompting for the existing one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid phone format: {phone}")]
    InvalidPhoneFormat { phone: String },

    #[error("No verification code found")]
    CodeNotFound,

    #[error("Verification code expired")]
    CodeExpired,

    #[error("Maximum verification attempts exceeded")]
    AttemptsExceeded,

    #[error("Invalid verification code")]
    InvalidCode,

    #[error("SMS dispatch failure")]
    SmsServiceFailure,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },
}
