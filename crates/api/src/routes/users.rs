//! User route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::User;
use crate::state::AppState;

/// Create the user routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/profile/{username}", get(profile))
}

/// Response for the user listing.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// Response for a profile lookup.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// List all users.
pub async fn index(State(state): State<AppState>) -> Json<UsersResponse> {
    Json(UsersResponse {
        users: state.store().users(),
    })
}

/// Look up a user by username.
pub async fn profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>> {
    let user = state
        .store()
        .user_by_username(&username)
        .ok_or(AppError::EntityNotFound("User"))?;

    Ok(Json(UserResponse { user }))
}
