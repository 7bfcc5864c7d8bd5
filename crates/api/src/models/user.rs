//! User domain types.

use serde::{Deserialize, Serialize};

use stylefeed_core::{UserId, UserRole};

/// A member of the platform, either a customer or a vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID. Immutable.
    pub id: UserId,
    pub username: String,
    pub full_name: String,
    pub email: String,
    /// Avatar image URL.
    pub avatar: String,
    pub role: UserRole,
    /// IDs of users following this user. May reference users that do
    /// not exist in the store.
    pub followers: Vec<UserId>,
    /// IDs of users this user follows.
    pub following: Vec<UserId>,
    pub social_stats: SocialStats,
}

/// Aggregate social counters shown on a profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialStats {
    pub posts_count: u32,
    pub followers_count: u32,
    pub following_count: u32,
}
