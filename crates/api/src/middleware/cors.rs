//! Permissive CORS for the browser client.
//!
//! The client is served from a different origin, so every response -
//! matched routes, fallbacks, and errors alike - carries the
//! permissive CORS header set. OPTIONS requests are answered directly
//! with 200 and no body, whether or not they are true preflights.

use axum::{
    extract::Request,
    http::{
        HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Add CORS headers to all responses and short-circuit OPTIONS.
///
/// Headers applied:
/// - `Access-Control-Allow-Origin: *`
/// - `Access-Control-Allow-Methods: GET, POST, PUT, DELETE, OPTIONS`
/// - `Access-Control-Allow-Headers: Content-Type, Authorization`
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );

    response
}
