//! Stylefeed Core - Shared types library.
//!
//! This crate provides common types used across Stylefeed components:
//! - `api` - The social-commerce API server
//! - `integration-tests` - End-to-end tests against the running API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no store
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the user role enum

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
