//! Post domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stylefeed_core::{PostId, ProductId, UserId};

/// A feed post authored by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post ID. Immutable.
    pub id: PostId,
    /// Authoring user.
    pub user_id: UserId,
    pub caption: String,
    /// Post image URL.
    pub image: String,
    /// Products pinned onto the image.
    pub product_tags: Vec<ProductTag>,
    /// Likes only ever grow; there is no unlike for posts.
    pub likes: Vec<Like>,
    /// Comment payloads are opaque; only the count is interpreted.
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

/// A product reference pinned at a normalized position on an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTag {
    pub product_id: ProductId,
    /// Horizontal position as a percentage of image width (0-100).
    pub x: u8,
    /// Vertical position as a percentage of image height (0-100).
    pub y: u8,
}

/// A like attributed to a user at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub user_id: UserId,
    pub liked_at: DateTime<Utc>,
}

/// Unstructured comment payload.
pub type Comment = serde_json::Value;
