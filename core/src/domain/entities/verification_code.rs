//! Verification record entity for phone-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of verification attempts allowed per record
pub const MAX_ATTEMPTS: u32 = 3;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default lifetime of a verification code (5 minutes)
pub const DEFAULT_CODE_TTL_MINUTES: i64 = 5;

/// One outstanding verification code for a phone number.
///
/// The phone number is the unique key: issuing a new code for a number that
/// already has one replaces the record. A record is usable for matching only
/// while it is neither expired nor exhausted; the attempt counter is bumped on
/// every verification attempt, right or wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Phone number this code was issued for (international format)
    pub phone: String,

    /// The 6-digit verification code
    pub code: String,

    /// Number of verification attempts made against this record
    pub attempts: u32,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp after which the code no longer matches
    pub expires_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Creates a fresh record for `phone` with the given code and lifetime.
    /// Attempts start at zero.
    pub fn new(phone: String, code: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            phone,
            code,
            attempts: 0,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Checks if the record has passed its expiry instant
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the attempt limit has been reached
    pub fn is_exhausted(&self) -> bool {
        self.attempts >= MAX_ATTEMPTS
    }

    /// A record is valid for matching iff it is neither expired nor exhausted
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_exhausted()
    }

    /// Remaining verification attempts (0 when exhausted)
    pub fn remaining_attempts(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }

    /// Time until expiration, or zero if already expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
