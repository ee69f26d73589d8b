//! Authentication response value object

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// Result of a successful code verification: the authenticated user and the
/// session credential issued for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user profile
    pub user: User,

    /// Signed session token
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(user: User, token: String, expires_in: i64) -> Self {
        Self {
            user,
            token,
            expires_in,
        }
    }
}
