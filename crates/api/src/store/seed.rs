//! Fixed startup dataset.
//!
//! The store always boots with the same two users, two products, two
//! posts, and one story. Timestamps are relative to boot time: the
//! posts were created two and four hours ago, the story expires in 24
//! hours.

use chrono::{Duration, Utc};

use stylefeed_core::{PostId, ProductId, StoryId, UserId, UserRole};

use crate::models::{Post, Product, ProductTag, SocialStats, Story, User};

use super::EntityStore;

pub(super) fn seeded_store() -> EntityStore {
    EntityStore::new(users(), products(), posts(), stories())
}

fn users() -> Vec<User> {
    vec![
        User {
            id: UserId::new("1"),
            username: "fashionista_maya".to_string(),
            full_name: "Maya Sharma".to_string(),
            email: "maya@example.com".to_string(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150"
                .to_string(),
            role: UserRole::Customer,
            followers: vec![UserId::new("2"), UserId::new("3")],
            following: vec![UserId::new("2"), UserId::new("4")],
            social_stats: SocialStats {
                posts_count: 12,
                followers_count: 1250,
                following_count: 890,
            },
        },
        User {
            id: UserId::new("2"),
            username: "style_guru_raj".to_string(),
            full_name: "Raj Patel".to_string(),
            email: "raj@example.com".to_string(),
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150"
                .to_string(),
            role: UserRole::Vendor,
            followers: vec![UserId::new("1")],
            following: vec![UserId::new("3"), UserId::new("4")],
            social_stats: SocialStats {
                posts_count: 45,
                followers_count: 5600,
                following_count: 234,
            },
        },
    ]
}

fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("p1"),
            name: "Floral Maxi Dress".to_string(),
            price: 2499,
            original_price: 3499,
            discount: 29,
            category: "women".to_string(),
            brand: "StyleCraft".to_string(),
            image: "https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?w=500"
                .to_string(),
            vendor_id: UserId::new("2"),
            views: 1250,
            likes: 89,
            purchases: 45,
        },
        Product {
            id: ProductId::new("p2"),
            name: "Classic White Shirt".to_string(),
            price: 1899,
            original_price: 2299,
            discount: 17,
            category: "men".to_string(),
            brand: "StyleCraft".to_string(),
            image: "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=500"
                .to_string(),
            vendor_id: UserId::new("2"),
            views: 2100,
            likes: 156,
            purchases: 78,
        },
    ]
}

fn posts() -> Vec<Post> {
    let now = Utc::now();

    vec![
        Post {
            id: PostId::new("post1"),
            user_id: UserId::new("1"),
            caption: "Loving this new floral dress! Perfect for the summer vibes 🌸 \
                      #SummerFashion #FloralDress #OOTD"
                .to_string(),
            image: "https://images.unsplash.com/photo-1469334031218-e382a71b716b?w=600"
                .to_string(),
            product_tags: vec![ProductTag {
                product_id: ProductId::new("p1"),
                x: 40,
                y: 50,
            }],
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: now - Duration::hours(2),
        },
        Post {
            id: PostId::new("post2"),
            user_id: UserId::new("2"),
            caption: "Perfect formal shirt for office meetings! Quality fabric and great fit 👔 \
                      #FormalWear #OfficeStyle"
                .to_string(),
            image: "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=600"
                .to_string(),
            product_tags: vec![ProductTag {
                product_id: ProductId::new("p2"),
                x: 50,
                y: 50,
            }],
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: now - Duration::hours(4),
        },
    ]
}

fn stories() -> Vec<Story> {
    let now = Utc::now();

    vec![Story {
        id: StoryId::new("story1"),
        user_id: UserId::new("1"),
        image: "https://images.unsplash.com/photo-1469334031218-e382a71b716b?w=400".to_string(),
        caption: "Perfect outfit for brunch! 🥐☕".to_string(),
        product_tags: vec![ProductTag {
            product_id: ProductId::new("p1"),
            x: 30,
            y: 60,
        }],
        views: Vec::new(),
        likes: Vec::new(),
        expires_at: now + Duration::hours(24),
        created_at: now,
    }]
}
