//! Logging SMS sender for environments without a delivery provider.

use async_trait::async_trait;
use uuid::Uuid;

use fs_shared::utils::phone::mask_phone;

use super::traits::SmsSender;

/// SMS sender that records the dispatch instead of delivering it.
///
/// Logs the send at info level with the phone masked. The code itself is only
/// emitted at debug level, which production log configurations do not enable.
pub struct LogSmsSender;

#[async_trait]
impl SmsSender for LogSmsSender {
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String> {
        let message_id = format!("log-{}", Uuid::new_v4());

        tracing::info!(
            phone = %mask_phone(phone),
            message_id = %message_id,
            event = "sms_dispatched",
            "Dispatched verification code"
        );
        tracing::debug!(code = %code, "Verification code contents");

        Ok(message_id)
    }
}
