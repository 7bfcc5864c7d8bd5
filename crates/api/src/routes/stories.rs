//! Story route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;

use stylefeed_core::{StoryId, UserId};

use crate::error::{AppError, Result};
use crate::models::Story;
use crate::state::AppState;
use crate::views::{self, StoryGroup};

use super::current_user_id;

/// Create the story routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/user/{user_id}", get(by_user))
        .route("/{id}/view", post(view))
        .route("/{id}/like", post(like))
}

/// Response for the grouped story listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoriesResponse {
    pub story_groups: Vec<StoryGroup>,
}

/// Response for one user's stories.
#[derive(Debug, Serialize)]
pub struct UserStoriesResponse {
    pub stories: Vec<Story>,
}

/// Response for recording a story view.
#[derive(Debug, Serialize)]
pub struct StoryViewResponse {
    pub message: &'static str,
}

/// Response for toggling a story like.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryLikeResponse {
    pub message: &'static str,
    pub likes_count: usize,
}

/// List active stories grouped by author.
pub async fn index(State(state): State<AppState>) -> Json<StoriesResponse> {
    let store = state.store();
    let story_groups = views::story_groups(&store.stories(), &store.users(), Utc::now());

    Json(StoriesResponse { story_groups })
}

/// List one user's active stories, newest first.
///
/// An unknown user simply has no stories; this is not an error.
pub async fn by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<UserStoriesResponse> {
    let store = state.store();
    let stories = views::user_stories(&store.stories(), &UserId::new(user_id), Utc::now());

    Json(UserStoriesResponse { stories })
}

/// Record that the current user viewed a story.
///
/// Repeat views by the same user are not recorded.
pub async fn view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoryViewResponse>> {
    state
        .store()
        .record_story_view(&StoryId::new(id), &current_user_id(), Utc::now())
        .ok_or(AppError::EntityNotFound("Story"))?;

    Ok(Json(StoryViewResponse {
        message: "Story viewed",
    }))
}

/// Toggle the current user's like on a story.
pub async fn like(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoryLikeResponse>> {
    let (liked, likes_count) = state
        .store()
        .toggle_story_like(&StoryId::new(id), &current_user_id(), Utc::now())
        .ok_or(AppError::EntityNotFound("Story"))?;

    Ok(Json(StoryLikeResponse {
        message: if liked { "Story liked" } else { "Story unliked" },
        likes_count,
    }))
}
