//! Join engine: denormalized read-only views over store snapshots.
//!
//! Every function here is pure - it takes entity snapshots (and, where
//! expiry matters, an explicit `now`) and produces typed view structs.
//! Nothing in this module touches the store. Missing relations are not
//! errors: a dangling author or vendor becomes null, a tag whose
//! product is gone is dropped, a story whose author is gone produces
//! no group.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use stylefeed_core::{ProductId, UserId};

use crate::models::{Post, Product, ProductTag, Story, User};

/// How many products the trending listing returns.
const TRENDING_LIMIT: usize = 3;

/// A post denormalized for the feed: author, resolved product tags,
/// and counters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    /// Authoring user, or null when the reference is dangling.
    pub user: Option<User>,
    /// Product tags with their products resolved; tags whose product
    /// is missing are dropped.
    pub products: Vec<TaggedProduct>,
    pub likes_count: usize,
    pub comments_count: usize,
}

/// A product tag with its product attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggedProduct {
    #[serde(flatten)]
    pub tag: ProductTag,
    pub product: Product,
}

/// A product with its vendor attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithVendor {
    #[serde(flatten)]
    pub product: Product,
    /// Vendor user, or null when no user matches `vendorId`.
    pub vendor: Option<User>,
}

/// One author's active stories.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryGroup {
    pub user: User,
    pub stories: Vec<Story>,
}

/// Denormalize posts for the feed listing.
#[must_use]
pub fn post_views(posts: &[Post], users: &[User], products: &[Product]) -> Vec<PostView> {
    let users_by_id = index_users(users);
    let products_by_id: HashMap<&ProductId, &Product> =
        products.iter().map(|p| (&p.id, p)).collect();

    posts
        .iter()
        .map(|post| {
            let tagged = post
                .product_tags
                .iter()
                .filter_map(|tag| {
                    products_by_id.get(&tag.product_id).map(|product| TaggedProduct {
                        tag: tag.clone(),
                        product: (*product).clone(),
                    })
                })
                .collect();

            PostView {
                user: users_by_id.get(&post.user_id).map(|u| (*u).clone()),
                products: tagged,
                likes_count: post.likes.len(),
                comments_count: post.comments.len(),
                post: post.clone(),
            }
        })
        .collect()
}

/// Group active stories by author, preserving first-seen order.
///
/// A story is active while `expiresAt` is strictly in the future.
/// Multiple stories by the same author collapse into one group.
#[must_use]
pub fn story_groups(stories: &[Story], users: &[User], now: DateTime<Utc>) -> Vec<StoryGroup> {
    let users_by_id = index_users(users);

    let mut groups: Vec<StoryGroup> = Vec::new();
    let mut group_position: HashMap<&UserId, usize> = HashMap::new();

    for story in stories {
        if !story.is_active(now) {
            continue;
        }
        let Some(user) = users_by_id.get(&story.user_id) else {
            continue;
        };

        let position = *group_position.entry(&story.user_id).or_insert_with(|| {
            groups.push(StoryGroup {
                user: (*user).clone(),
                stories: Vec::new(),
            });
            groups.len() - 1
        });
        if let Some(group) = groups.get_mut(position) {
            group.stories.push(story.clone());
        }
    }

    groups
}

/// Active stories for one user, newest first.
#[must_use]
pub fn user_stories(stories: &[Story], user_id: &UserId, now: DateTime<Utc>) -> Vec<Story> {
    let mut found: Vec<Story> = stories
        .iter()
        .filter(|story| &story.user_id == user_id && story.is_active(now))
        .cloned()
        .collect();
    found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    found
}

/// Attach each product's vendor.
#[must_use]
pub fn products_with_vendor(products: &[Product], users: &[User]) -> Vec<ProductWithVendor> {
    let users_by_id = index_users(users);

    products
        .iter()
        .map(|product| ProductWithVendor {
            vendor: users_by_id.get(&product.vendor_id).map(|u| (*u).clone()),
            product: product.clone(),
        })
        .collect()
}

/// Top products by view count, vendors attached.
///
/// The sort is stable, so products with equal views keep their
/// insertion order.
#[must_use]
pub fn trending_products(products: &[Product], users: &[User]) -> Vec<ProductWithVendor> {
    let mut ranked: Vec<Product> = products.to_vec();
    ranked.sort_by(|a, b| b.views.cmp(&a.views));
    ranked.truncate(TRENDING_LIMIT);

    products_with_vendor(&ranked, users)
}

fn index_users(users: &[User]) -> HashMap<&UserId, &User> {
    users.iter().map(|u| (&u.id, u)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, Utc};

    use stylefeed_core::{PostId, ProductId, StoryId, UserId, UserRole};

    use super::*;
    use crate::models::{Like, SocialStats};

    fn user(id: &str) -> User {
        User {
            id: UserId::new(id),
            username: format!("user_{id}"),
            full_name: format!("User {id}"),
            email: format!("{id}@example.com"),
            avatar: String::new(),
            role: UserRole::Customer,
            followers: Vec::new(),
            following: Vec::new(),
            social_stats: SocialStats {
                posts_count: 0,
                followers_count: 0,
                following_count: 0,
            },
        }
    }

    fn product(id: &str, vendor_id: &str, views: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: 1000,
            original_price: 1200,
            discount: 17,
            category: "women".to_string(),
            brand: "StyleCraft".to_string(),
            image: String::new(),
            vendor_id: UserId::new(vendor_id),
            views,
            likes: 0,
            purchases: 0,
        }
    }

    fn post(id: &str, user_id: &str, tags: Vec<ProductTag>) -> Post {
        Post {
            id: PostId::new(id),
            user_id: UserId::new(user_id),
            caption: String::new(),
            image: String::new(),
            product_tags: tags,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn tag(product_id: &str) -> ProductTag {
        ProductTag {
            product_id: ProductId::new(product_id),
            x: 50,
            y: 50,
        }
    }

    fn story(id: &str, user_id: &str, expires_in_hours: i64) -> Story {
        let now = Utc::now();
        Story {
            id: StoryId::new(id),
            user_id: UserId::new(user_id),
            image: String::new(),
            caption: String::new(),
            product_tags: Vec::new(),
            views: Vec::new(),
            likes: Vec::new(),
            expires_at: now + Duration::hours(expires_in_hours),
            created_at: now,
        }
    }

    #[test]
    fn test_post_view_counts_match_lists() {
        let mut p = post("post1", "1", vec![tag("p1")]);
        p.likes.push(Like {
            user_id: UserId::new("2"),
            liked_at: Utc::now(),
        });
        p.comments.push(serde_json::json!({"text": "nice"}));
        p.comments.push(serde_json::json!({"text": "love it"}));

        let views = post_views(&[p], &[user("1")], &[product("p1", "1", 0)]);

        let view = views.first().unwrap();
        assert_eq!(view.likes_count, view.post.likes.len());
        assert_eq!(view.likes_count, 1);
        assert_eq!(view.comments_count, 2);
        assert_eq!(view.user.as_ref().unwrap().id, UserId::new("1"));
        assert_eq!(view.products.len(), 1);
    }

    #[test]
    fn test_post_view_dangling_author_is_null() {
        let views = post_views(&[post("post1", "ghost", Vec::new())], &[user("1")], &[]);
        assert!(views.first().unwrap().user.is_none());
    }

    #[test]
    fn test_post_view_drops_tags_with_missing_product() {
        let p = post("post1", "1", vec![tag("p1"), tag("gone")]);
        let views = post_views(&[p], &[user("1")], &[product("p1", "1", 0)]);

        let view = views.first().unwrap();
        assert_eq!(view.products.len(), 1);
        assert_eq!(view.products.first().unwrap().product.id, ProductId::new("p1"));
        // The raw tag list on the post itself is untouched.
        assert_eq!(view.post.product_tags.len(), 2);
    }

    #[test]
    fn test_post_view_wire_shape_is_flattened() {
        let views = post_views(&[post("post1", "1", Vec::new())], &[user("1")], &[]);
        let value = serde_json::to_value(views.first().unwrap()).unwrap();

        // Post fields at the top level, joined fields beside them.
        assert_eq!(value["id"], "post1");
        assert_eq!(value["userId"], "1");
        assert_eq!(value["likesCount"], 0);
        assert_eq!(value["commentsCount"], 0);
        assert_eq!(value["user"]["username"], "user_1");
        assert!(value["products"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_story_groups_filter_expired() {
        let now = Utc::now();
        let stories = vec![story("s1", "1", 24), story("s2", "1", -1)];

        let groups = story_groups(&stories, &[user("1")], now);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.first().unwrap().stories.len(), 1);
        assert_eq!(groups.first().unwrap().stories.first().unwrap().id, StoryId::new("s1"));
    }

    #[test]
    fn test_story_groups_collapse_by_author_in_first_seen_order() {
        let now = Utc::now();
        let stories = vec![
            story("s1", "2", 12),
            story("s2", "1", 12),
            story("s3", "2", 12),
        ];

        let groups = story_groups(&stories, &[user("1"), user("2")], now);

        assert_eq!(groups.len(), 2);
        let first = groups.first().unwrap();
        assert_eq!(first.user.id, UserId::new("2"));
        assert_eq!(first.stories.len(), 2);
        assert_eq!(groups.get(1).unwrap().user.id, UserId::new("1"));
    }

    #[test]
    fn test_story_groups_skip_missing_author() {
        let groups = story_groups(&[story("s1", "ghost", 24)], &[user("1")], Utc::now());
        assert!(groups.is_empty());
    }

    #[test]
    fn test_user_stories_newest_first() {
        let now = Utc::now();
        let mut s1 = story("s1", "1", 24);
        s1.created_at = now - Duration::hours(3);
        let mut s2 = story("s2", "1", 24);
        s2.created_at = now - Duration::hours(1);
        let expired = story("s3", "1", -1);
        let other = story("s4", "2", 24);

        let found = user_stories(&[s1, s2, expired, other], &UserId::new("1"), now);

        assert_eq!(found.len(), 2);
        assert_eq!(found.first().unwrap().id, StoryId::new("s2"));
        assert_eq!(found.get(1).unwrap().id, StoryId::new("s1"));
    }

    #[test]
    fn test_products_with_vendor_resolves_or_nulls() {
        let products = vec![product("p1", "2", 10), product("p2", "ghost", 20)];
        let joined = products_with_vendor(&products, &[user("2")]);

        assert_eq!(joined.first().unwrap().vendor.as_ref().unwrap().id, UserId::new("2"));
        assert!(joined.get(1).unwrap().vendor.is_none());
    }

    #[test]
    fn test_trending_sorts_by_views_and_limits_to_three() {
        let products = vec![
            product("p1", "1", 100),
            product("p2", "1", 400),
            product("p3", "1", 300),
            product("p4", "1", 200),
        ];

        let trending = trending_products(&products, &[user("1")]);

        let ids: Vec<&str> = trending.iter().map(|p| p.product.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p3", "p4"]);
    }

    #[test]
    fn test_trending_ties_keep_insertion_order() {
        let products = vec![
            product("p1", "1", 100),
            product("p2", "1", 100),
            product("p3", "1", 100),
        ];

        let trending = trending_products(&products, &[user("1")]);

        let ids: Vec<&str> = trending.iter().map(|p| p.product.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }
}
