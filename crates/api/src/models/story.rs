//! Story domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stylefeed_core::{StoryId, UserId};

use super::post::{Like, ProductTag};

/// An ephemeral story.
///
/// A story is never deleted; once `expires_at` passes it simply stops
/// appearing in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Unique story ID. Immutable.
    pub id: StoryId,
    /// Authoring user.
    pub user_id: UserId,
    /// Story image URL.
    pub image: String,
    pub caption: String,
    /// Products pinned onto the image.
    pub product_tags: Vec<ProductTag>,
    /// Views, one per user (repeat views are not recorded).
    pub views: Vec<StoryView>,
    pub likes: Vec<Like>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Story {
    /// Whether the story should still appear in listings at `now`.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// A view attributed to a user at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryView {
    pub user_id: UserId,
    pub viewed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use stylefeed_core::{StoryId, UserId};

    use super::Story;

    fn story_expiring_at(expires_at: chrono::DateTime<Utc>) -> Story {
        Story {
            id: StoryId::new("s1"),
            user_id: UserId::new("1"),
            image: String::new(),
            caption: String::new(),
            product_tags: Vec::new(),
            views: Vec::new(),
            likes: Vec::new(),
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_story_active_until_expiry() {
        let now = Utc::now();

        assert!(story_expiring_at(now + Duration::hours(1)).is_active(now));
        assert!(!story_expiring_at(now - Duration::hours(1)).is_active(now));
        // Expiry is strict: a story expiring exactly now is inactive.
        assert!(!story_expiring_at(now).is_active(now));
    }
}
