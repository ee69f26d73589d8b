//! Configuration for the verification service

use crate::domain::entities::verification_code::{DEFAULT_CODE_TTL_MINUTES, MAX_ATTEMPTS};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of minutes before a verification code expires
    pub code_ttl_minutes: i64,

    /// Maximum number of verification attempts allowed per code
    pub max_attempts: u32,

    /// Accept any submitted code instead of comparing against the stored one.
    ///
    /// Consulted exactly once per verification. This is the development-mode
    /// switch; production configurations must leave it off. The attempt
    /// counter is incremented even when the comparison is bypassed.
    pub relaxed_validation: bool,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: DEFAULT_CODE_TTL_MINUTES,
            max_attempts: MAX_ATTEMPTS,
            relaxed_validation: false,
        }
    }
}
