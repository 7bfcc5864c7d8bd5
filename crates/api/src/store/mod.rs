//! In-memory entity store.
//!
//! # Collections
//!
//! - `users` - platform members (customers and vendors)
//! - `products` - vendor listings with view/like/purchase counters
//! - `posts` - the feed, including per-post likes and comments
//! - `stories` - ephemeral stories with views and likes
//!
//! Collections are seeded once at startup and shared across request
//! handlers. Each collection keeps insertion order for scans plus an
//! id index for O(1) lookups. Mutation is confined to single-entity
//! updates performed under the collection's write lock, so a reader
//! never observes a partially applied change. There are no
//! cross-collection transactions and no deletes.

mod seed;

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use stylefeed_core::{PostId, ProductId, StoryId, UserId};

use crate::models::{Like, Post, Product, Story, StoryView, User};

/// An insertion-ordered collection with O(1) lookup by id.
struct Collection<K, T> {
    entries: Vec<T>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash, T: Clone> Collection<K, T> {
    fn new(entries: Vec<T>, key: impl Fn(&T) -> K) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (key(entry), position))
            .collect();
        Self { entries, index }
    }

    fn get(&self, id: &K) -> Option<&T> {
        self.index.get(id).and_then(|&position| self.entries.get(position))
    }

    fn get_mut(&mut self, id: &K) -> Option<&mut T> {
        self.index
            .get(id)
            .copied()
            .and_then(|position| self.entries.get_mut(position))
    }

    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Clone the collection contents in insertion order.
    fn snapshot(&self) -> Vec<T> {
        self.entries.clone()
    }
}

/// Process-wide store of all domain entities.
///
/// Handlers receive the store through `AppState`; it is never a
/// global. Reads take a consistent per-collection snapshot; writes
/// are single-entity appends or toggles under the write lock.
pub struct EntityStore {
    users: RwLock<Collection<UserId, User>>,
    products: RwLock<Collection<ProductId, Product>>,
    posts: RwLock<Collection<PostId, Post>>,
    stories: RwLock<Collection<StoryId, Story>>,
}

impl EntityStore {
    /// Build a store from explicit collections.
    #[must_use]
    pub fn new(
        users: Vec<User>,
        products: Vec<Product>,
        posts: Vec<Post>,
        stories: Vec<Story>,
    ) -> Self {
        Self {
            users: RwLock::new(Collection::new(users, |u| u.id.clone())),
            products: RwLock::new(Collection::new(products, |p| p.id.clone())),
            posts: RwLock::new(Collection::new(posts, |p| p.id.clone())),
            stories: RwLock::new(Collection::new(stories, |s| s.id.clone())),
        }
    }

    /// Build a store preloaded with the fixed startup dataset.
    #[must_use]
    pub fn seeded() -> Self {
        seed::seeded_store()
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Look up a user by id.
    #[must_use]
    pub fn user(&self, id: &UserId) -> Option<User> {
        read(&self.users).get(id).cloned()
    }

    /// Look up a user by username.
    #[must_use]
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        read(&self.users).iter().find(|u| u.username == username).cloned()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        read(&self.products).get(id).cloned()
    }

    /// Look up a post by id.
    #[must_use]
    pub fn post(&self, id: &PostId) -> Option<Post> {
        read(&self.posts).get(id).cloned()
    }

    /// Look up a story by id.
    #[must_use]
    pub fn story(&self, id: &StoryId) -> Option<Story> {
        read(&self.stories).get(id).cloned()
    }

    // =========================================================================
    // Snapshots (insertion order)
    // =========================================================================

    /// Snapshot of all users.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        read(&self.users).snapshot()
    }

    /// Snapshot of all products.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        read(&self.products).snapshot()
    }

    /// Snapshot of all posts.
    #[must_use]
    pub fn posts(&self) -> Vec<Post> {
        read(&self.posts).snapshot()
    }

    /// Snapshot of all stories, expired ones included.
    #[must_use]
    pub fn stories(&self) -> Vec<Story> {
        read(&self.stories).snapshot()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a like to a post, returning the new likes count.
    ///
    /// The append is unconditional: liking twice records two likes.
    /// Returns `None` if no post has this id.
    pub fn like_post(&self, id: &PostId, like: Like) -> Option<usize> {
        let mut posts = write(&self.posts);
        let post = posts.get_mut(id)?;
        post.likes.push(like);
        Some(post.likes.len())
    }

    /// Bump a product's view counter, returning the updated product.
    ///
    /// Returns `None` if no product has this id.
    pub fn record_product_view(&self, id: &ProductId) -> Option<Product> {
        let mut products = write(&self.products);
        let product = products.get_mut(id)?;
        product.views += 1;
        Some(product.clone())
    }

    /// Record that `user_id` viewed a story. Repeat views are no-ops.
    ///
    /// Returns `None` if no story has this id.
    pub fn record_story_view(
        &self,
        id: &StoryId,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Option<()> {
        let mut stories = write(&self.stories);
        let story = stories.get_mut(id)?;
        if !story.views.iter().any(|view| &view.user_id == user_id) {
            story.views.push(StoryView {
                user_id: user_id.clone(),
                viewed_at: now,
            });
        }
        Some(())
    }

    /// Toggle `user_id`'s like on a story.
    ///
    /// Returns whether the story is now liked by the user and the new
    /// likes count, or `None` if no story has this id.
    pub fn toggle_story_like(
        &self,
        id: &StoryId,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Option<(bool, usize)> {
        let mut stories = write(&self.stories);
        let story = stories.get_mut(id)?;
        match story.likes.iter().position(|like| &like.user_id == user_id) {
            Some(position) => {
                story.likes.remove(position);
                Some((false, story.likes.len()))
            }
            None => {
                story.likes.push(Like {
                    user_id: user_id.clone(),
                    liked_at: now,
                });
                Some((true, story.likes.len()))
            }
        }
    }
}

// Poisoning can only happen if a writer panicked mid-update; every
// mutation is a single append/toggle, so the data is still well
// formed. Recover the guard instead of propagating the panic.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
