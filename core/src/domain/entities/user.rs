//! User entity representing a registered FoodSave user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the profile type of a user in the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    /// A shopper looking for discounted products
    Client,
    /// A store owner listing products
    Merchant,
}

/// Notification and search preferences attached to a user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Preferred product categories
    pub categories: Vec<String>,

    /// Maximum search distance in kilometers
    pub max_distance_km: u32,

    /// Whether push notifications are enabled
    pub notifications: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            max_distance_km: 10,
            notifications: true,
        }
    }
}

/// User profile, keyed by phone number.
///
/// Profiles are created lazily on first successful phone verification and
/// reused unchanged afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Phone number in international format
    pub phone: String,

    /// Display name
    pub name: String,

    /// Profile type (client or merchant)
    pub profile_type: ProfileType,

    /// Search and notification preferences
    pub preferences: UserPreferences,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user profile for a freshly verified phone number
    pub fn new(phone: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phone,
            name: String::from("Пользователь"),
            profile_type: ProfileType::Client,
            preferences: UserPreferences::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the user is a client
    pub fn is_client(&self) -> bool {
        matches!(self.profile_type, ProfileType::Client)
    }
}
