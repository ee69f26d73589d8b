//! API response envelope types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standardized error response for domain failures.
///
/// `error` carries the stable machine-readable reason the client branches on
/// (for example `CODE_EXPIRED`); `message` carries the localized
/// human-readable text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`; kept explicit so every response body carries it
    pub success: bool,

    /// Stable error code for client-side handling
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Timestamp of when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
