//! Verification code workflow: issuing codes, storing them with expiry and
//! attempt bookkeeping, and verifying attacker-controlled submissions.
//!
//! The store keeps at most one live code per phone number. Expiry is lazy:
//! records are reaped by the opportunistic cleanup that runs before each
//! verification, not by a background timer.

mod config;
mod memory;
mod service;
mod sms;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use memory::MemoryCodeStore;
pub use service::VerificationService;
pub use sms::LogSmsSender;
pub use traits::{CodeStore, SmsSender};
pub use types::IssuedCode;
