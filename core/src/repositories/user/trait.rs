//! User repository trait defining the interface for user lookup and creation.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository contract for user profiles, keyed by phone number.
///
/// The verification flow only ever needs two operations: a plain lookup, and
/// an idempotent get-or-create used on first successful verification.
/// `get_or_create` must be safe under concurrent first-time verification from
/// the same phone: it never produces duplicate users for one number.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their phone number
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this phone
    /// * `Err(DomainError)` - Lookup failed
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError>;

    /// Return the user registered with `phone`, creating a fresh profile if
    /// none exists. Existing profiles are returned unchanged.
    async fn get_or_create(&self, phone: &str) -> Result<User, DomainError>;
}
