//! Integration tests for story grouping, expiry, views, and likes.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::json;

use stylefeed_integration_tests::TestContext;

// ============================================================================
// Grouped listing
// ============================================================================

#[tokio::test]
async fn test_active_story_listed_in_author_group() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.get_json("/api/stories").await;
    assert_eq!(status, StatusCode::OK);

    let groups = body["storyGroups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);

    let group = &groups[0];
    assert_eq!(group["user"]["id"], "1");
    assert_eq!(group["user"]["username"], "fashionista_maya");

    let stories = group["stories"].as_array().unwrap();
    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0]["id"], "story1");
    // The seed story expires 24h after boot, so it is active now.
    assert_eq!(stories[0]["userId"], "1");
}

#[tokio::test]
async fn test_stories_by_user() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.get_json("/api/stories/user/1").await;
    assert_eq!(status, StatusCode::OK);
    let stories = body["stories"].as_array().unwrap();
    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0]["id"], "story1");

    // A user without stories gets an empty list, not an error.
    let (status, body) = ctx.get_json("/api/stories/user/2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["stories"].as_array().unwrap().is_empty());
}

// ============================================================================
// Views
// ============================================================================

#[tokio::test]
async fn test_story_view_is_deduplicated() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.post_json("/api/stories/story1/view").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Story viewed"}));

    // Second view by the same (fixed) user changes nothing.
    let (status, _) = ctx.post_json("/api/stories/story1/view").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = ctx.get_json("/api/stories").await;
    let views = body["storyGroups"][0]["stories"][0]["views"].as_array().unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0]["userId"], "1");
}

#[tokio::test]
async fn test_view_unknown_story_is_404() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.post_json("/api/stories/nope/view").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Story not found"}));
}

// ============================================================================
// Likes
// ============================================================================

#[tokio::test]
async fn test_story_like_toggles() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.post_json("/api/stories/story1/like").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Story liked", "likesCount": 1}));

    let (status, body) = ctx.post_json("/api/stories/story1/like").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Story unliked", "likesCount": 0}));
}

#[tokio::test]
async fn test_like_unknown_story_is_404() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.post_json("/api/stories/nope/like").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Story not found"}));
}
