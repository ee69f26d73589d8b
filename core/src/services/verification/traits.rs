//! Traits for the verification store and SMS dispatch integration

use async_trait::async_trait;
use chrono::Duration;

use crate::domain::entities::verification_code::VerificationRecord;

/// Trait for SMS dispatch integration.
///
/// Actual delivery is an external concern; the protocol only needs a seam to
/// hand the code off through.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send a verification code, returning a provider message id
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String>;
}

/// Keyed storage of outstanding verification codes.
///
/// One record per phone number. Per-key operations are atomic with respect to
/// each other: a resend racing a verification attempt never double-increments
/// the counter or reads a deleted record as present.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Create or replace the record for `phone` with a fresh code, the
    /// attempt counter reset to zero and expiry set to `now + ttl`.
    /// Overwrite is always allowed; this is what makes resend work.
    async fn put(&self, phone: &str, code: &str, ttl: Duration);

    /// Current record for `phone`, if any. Pure lookup, no side effects.
    async fn get(&self, phone: &str) -> Option<VerificationRecord>;

    /// Atomically increment the attempt counter, returning the new count.
    /// No-op (returns `None`) when no record exists.
    async fn increment_attempts(&self, phone: &str) -> Option<u32>;

    /// Remove the record unconditionally. Idempotent.
    async fn delete(&self, phone: &str);

    /// Remove every record whose expiry has passed. Runs opportunistically
    /// before each verification attempt; unexpired records are untouched.
    async fn cleanup_expired(&self);
}
