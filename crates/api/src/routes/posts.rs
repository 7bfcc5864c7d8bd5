//! Post route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;

use stylefeed_core::PostId;

use crate::error::{AppError, Result};
use crate::models::Like;
use crate::state::AppState;
use crate::views::{self, PostView};

use super::current_user_id;

/// Create the post routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/{id}/like", post(like))
}

/// Response for the feed listing.
#[derive(Debug, Serialize)]
pub struct PostsResponse {
    pub posts: Vec<PostView>,
    pub pagination: Pagination,
}

/// Fixed single-page pagination; the feed is small enough to return
/// whole.
#[derive(Debug, Serialize)]
pub struct Pagination {
    pub current: u32,
    pub pages: u32,
    pub total: usize,
}

/// Response for liking a post.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub likes_count: usize,
    pub is_liked: bool,
}

/// List all posts with author, tagged products, and counters attached.
pub async fn index(State(state): State<AppState>) -> Json<PostsResponse> {
    let store = state.store();
    let posts = views::post_views(&store.posts(), &store.users(), &store.products());
    let total = posts.len();

    Json(PostsResponse {
        posts,
        pagination: Pagination {
            current: 1,
            pages: 1,
            total,
        },
    })
}

/// Append a like from the current user to a post.
///
/// The append is unconditional; liking twice records two likes.
pub async fn like(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LikeResponse>> {
    let like = Like {
        user_id: current_user_id(),
        liked_at: Utc::now(),
    };

    let likes_count = state
        .store()
        .like_post(&PostId::new(id), like)
        .ok_or(AppError::EntityNotFound("Post"))?;

    tracing::debug!(likes_count, "post liked");

    Ok(Json(LikeResponse {
        likes_count,
        is_liked: true,
    }))
}
