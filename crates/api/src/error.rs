//! Unified error handling for the API.
//!
//! Provides a unified `AppError` type that serializes to the JSON error
//! body the client expects. Route handlers that can fail return
//! `Result<T, AppError>`. A missing joined relation (vendor, author,
//! tagged product) is not an error - the view layer resolves it to
//! null or omission instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// No route matched the request method and path.
    #[error("Not found")]
    RouteNotFound,

    /// A referenced entity is absent from its collection.
    #[error("{0} not found")]
    EntityNotFound(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::RouteNotFound | Self::EntityNotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(serde_json::json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        assert_eq!(AppError::RouteNotFound.to_string(), "Not found");
        assert_eq!(AppError::EntityNotFound("Post").to_string(), "Post not found");
        assert_eq!(AppError::EntityNotFound("Story").to_string(), "Story not found");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(get_status(AppError::RouteNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            get_status(AppError::EntityNotFound("Product")),
            StatusCode::NOT_FOUND
        );
    }
}
