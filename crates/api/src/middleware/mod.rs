//! HTTP middleware for the API.
//!
//! The only middleware of our own is the CORS layer; request tracing
//! comes from `tower-http`.

pub mod cors;

pub use cors::cors_middleware;
