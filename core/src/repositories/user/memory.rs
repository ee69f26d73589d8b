//! In-memory implementation of the user repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::UserRepository;

/// Process-wide in-memory user directory, keyed by phone number.
///
/// `get_or_create` performs its lookup and insert under a single write lock,
/// so concurrent first-time verifications for the same phone resolve to one
/// profile.
pub struct MemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(phone).cloned())
    }

    async fn get_or_create(&self, phone: &str) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let user = users
            .entry(phone.to_string())
            .or_insert_with(|| User::new(phone.to_string()));
        Ok(user.clone())
    }
}
