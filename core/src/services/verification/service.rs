//! Verification protocol handler: code issuance and verification.

use chrono::Duration;
use constant_time_eq::constant_time_eq;
use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::Arc;

use crate::domain::entities::verification_code::CODE_LENGTH;
use crate::errors::{AuthError, DomainResult};
use fs_shared::utils::phone::{is_valid_phone, mask_phone, normalize_phone};

use super::config::VerificationServiceConfig;
use super::traits::{CodeStore, SmsSender};
use super::types::IssuedCode;

/// Orchestrates the verification-code state machine on top of a [`CodeStore`].
///
/// The states per phone number are implicit in the store contents: no record
/// (NoCode), a live record (Pending), a record past its expiry (Expired), or a
/// record whose attempt counter has hit the limit (Exhausted).
pub struct VerificationService<S: SmsSender, C: CodeStore> {
    sms_sender: Arc<S>,
    store: Arc<C>,
    config: VerificationServiceConfig,
}

impl<S: SmsSender, C: CodeStore> VerificationService<S, C> {
    /// Create a new verification service
    pub fn new(sms_sender: Arc<S>, store: Arc<C>, config: VerificationServiceConfig) -> Self {
        Self {
            sms_sender,
            store,
            config,
        }
    }

    /// Issue a fresh verification code for `phone`.
    ///
    /// Any previously issued code for the number is overwritten, with the
    /// attempt counter reset to zero; re-requesting a code is always allowed.
    ///
    /// # Errors
    ///
    /// * [`AuthError::InvalidPhoneFormat`] - phone fails format validation
    /// * [`AuthError::SmsServiceFailure`] - dispatch through the sender failed
    pub async fn request_code(&self, phone: &str) -> DomainResult<IssuedCode> {
        let phone = normalize_phone(phone);
        if !is_valid_phone(&phone) {
            return Err(AuthError::InvalidPhoneFormat {
                phone: mask_phone(&phone),
            }
            .into());
        }

        let code = Self::generate_secure_code();
        let ttl = Duration::minutes(self.config.code_ttl_minutes);

        self.store.put(&phone, &code, ttl).await;

        tracing::info!(
            phone = %mask_phone(&phone),
            event = "code_issued",
            ttl_minutes = self.config.code_ttl_minutes,
            "Issued verification code"
        );

        self.sms_sender
            .send_verification_code(&phone, &code)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %mask_phone(&phone),
                    error = %e,
                    event = "sms_dispatch_failed",
                    "Failed to dispatch verification code"
                );
                AuthError::SmsServiceFailure
            })?;

        Ok(IssuedCode {
            code,
            expires_in: self.config.code_ttl_minutes * 60,
        })
    }

    /// Verify a submitted code against the stored record for `phone`.
    ///
    /// Expiry and the attempt limit are checked, in that order, before the
    /// counter is incremented. The counter is then incremented on every
    /// attempt, right or wrong, including when `relaxed_validation` bypasses
    /// the comparison. Success, expiry detection, and attempt exhaustion all
    /// delete the record; a wrong code on a record with attempts remaining
    /// leaves it in place.
    ///
    /// # Errors
    ///
    /// * [`AuthError::CodeNotFound`] - no code outstanding for this number
    /// * [`AuthError::CodeExpired`] - code past its expiry, record deleted
    /// * [`AuthError::AttemptsExceeded`] - attempt limit hit, record deleted
    /// * [`AuthError::InvalidCode`] - wrong code, attempts remain
    pub async fn verify_code(&self, phone: &str, code: &str) -> DomainResult<()> {
        let phone = normalize_phone(phone);

        // Snapshot this number's record before the global reap so an expired
        // code is still reported as expired rather than missing
        let record = self.store.get(&phone).await;

        // Opportunistic reaping of every expired record, not just this one
        self.store.cleanup_expired().await;

        let record = match record {
            Some(record) => record,
            None => {
                tracing::warn!(
                    phone = %mask_phone(&phone),
                    event = "code_not_found",
                    "Verification attempted with no outstanding code"
                );
                return Err(AuthError::CodeNotFound.into());
            }
        };

        if record.is_expired() {
            self.store.delete(&phone).await;
            tracing::warn!(
                phone = %mask_phone(&phone),
                event = "code_expired",
                "Verification attempted with an expired code"
            );
            return Err(AuthError::CodeExpired.into());
        }

        if record.attempts >= self.config.max_attempts {
            self.store.delete(&phone).await;
            tracing::warn!(
                phone = %mask_phone(&phone),
                event = "attempts_exceeded",
                "Verification attempted on an exhausted code"
            );
            return Err(AuthError::AttemptsExceeded.into());
        }

        // Counted before the comparison, even in relaxed mode
        let attempts = self
            .store
            .increment_attempts(&phone)
            .await
            .unwrap_or(record.attempts + 1);

        let matched = self.config.relaxed_validation || Self::codes_match(&record.code, code);

        if !matched {
            if attempts >= self.config.max_attempts {
                self.store.delete(&phone).await;
                tracing::warn!(
                    phone = %mask_phone(&phone),
                    event = "attempts_exceeded",
                    attempts = attempts,
                    "Final verification attempt failed"
                );
                return Err(AuthError::AttemptsExceeded.into());
            }

            tracing::warn!(
                phone = %mask_phone(&phone),
                event = "invalid_code",
                attempts = attempts,
                "Verification code mismatch"
            );
            return Err(AuthError::InvalidCode.into());
        }

        self.store.delete(&phone).await;

        tracing::info!(
            phone = %mask_phone(&phone),
            event = "code_verified",
            "Verification code accepted"
        );

        Ok(())
    }

    /// Generate a 6-digit code from the OS CSPRNG, zero-padded
    pub fn generate_secure_code() -> String {
        let mut bytes = [0u8; 4];
        OsRng.fill_bytes(&mut bytes);
        let num = u32::from_le_bytes(bytes) % 1_000_000;
        format!("{:0width$}", num, width = CODE_LENGTH)
    }

    /// Constant-time comparison of the stored and submitted codes
    fn codes_match(stored: &str, submitted: &str) -> bool {
        if stored.len() != submitted.len() {
            return false;
        }
        constant_time_eq(stored.as_bytes(), submitted.as_bytes())
    }
}
