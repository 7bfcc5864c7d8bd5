//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/health                   - Health check
//!
//! # Posts
//! GET  /api/posts                    - Feed listing (joined)
//! POST /api/posts/{id}/like          - Like a post
//!
//! # Stories
//! GET  /api/stories                  - Active stories grouped by author
//! GET  /api/stories/user/{userId}    - Active stories for one user
//! POST /api/stories/{id}/view        - Record a story view
//! POST /api/stories/{id}/like        - Toggle a story like
//!
//! # Products
//! GET  /api/products                 - Product listing with vendors
//! GET  /api/products/trending        - Top 3 products by views
//! GET  /api/products/{id}            - Product detail (counts the view)
//!
//! # Users
//! GET  /api/users                    - User listing
//! GET  /api/users/profile/{username} - Profile lookup by username
//! ```
//!
//! Anything else is a 404 with `{"error": "Not found"}` - including a
//! known path with the wrong method. OPTIONS requests are answered by
//! the CORS middleware.

pub mod posts;
pub mod products;
pub mod stories;
pub mod users;

use axum::{Json, Router, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;

use stylefeed_core::UserId;

use crate::error::AppError;
use crate::middleware;
use crate::state::AppState;

/// Identity that likes and views are attributed to.
///
/// Known limitation: there is no authentication, so every mutation is
/// made by this fixed user rather than a caller-supplied identity.
pub(crate) fn current_user_id() -> UserId {
    UserId::new("1")
}

/// Create the /api routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/posts", posts::router())
        .nest("/stories", stories::router())
        .nest("/products", products::router())
        .nest("/users", users::router())
}

/// Create the complete application: routes, fallback, and middleware.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(axum::middleware::from_fn(middleware::cors_middleware))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Report that the service is up.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Stylefeed API is running",
        timestamp: Utc::now(),
    })
}

/// Catch-all for unmatched method/path pairs.
async fn not_found() -> AppError {
    AppError::RouteNotFound
}
