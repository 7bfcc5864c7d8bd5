//! Integration tests for Stylefeed.
//!
//! These tests boot the real server in-process on an ephemeral port
//! and exercise it over HTTP with `reqwest`. No external services are
//! required - the entity store is in-memory and freshly seeded per
//! test, so tests never interfere with each other.
//!
//! # Test Categories
//!
//! - `api_posts` - Feed listing and post likes
//! - `api_products` - Product listings, trending, detail views
//! - `api_stories` - Story grouping, expiry, views, likes
//! - `api_routing` - Health, 404s, CORS, OPTIONS

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)]

use std::net::{IpAddr, Ipv4Addr};

use stylefeed_api::config::ApiConfig;
use stylefeed_api::routes;
use stylefeed_api::state::AppState;
use stylefeed_api::store::EntityStore;

/// A running server instance plus a client to talk to it.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestContext {
    /// Boot a freshly seeded server on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind; no test can run without it.
    pub async fn new() -> Self {
        let config = ApiConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
        };
        let state = AppState::new(config, EntityStore::seeded());
        let app = routes::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    /// GET a path, returning status and parsed JSON body.
    pub async fn get_json(&self, path: &str) -> (reqwest::StatusCode, serde_json::Value) {
        let resp = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("GET request failed");
        let status = resp.status();
        let body = resp.json().await.expect("Response body is not JSON");
        (status, body)
    }

    /// POST to a path (no body), returning status and parsed JSON body.
    pub async fn post_json(&self, path: &str) -> (reqwest::StatusCode, serde_json::Value) {
        let resp = self
            .client
            .post(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("POST request failed");
        let status = resp.status();
        let body = resp.json().await.expect("Response body is not JSON");
        (status, body)
    }
}
