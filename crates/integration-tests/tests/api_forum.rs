//! Forum flows end-to-end against an in-memory store.

use serde_json::json;

use integration_tests::{app, bare_state, forum_state, send_json};

#[tokio::test]
async fn forum_routes_degrade_to_503_without_a_store() {
    let app = app(bare_state());

    let (status, body) = send_json(&app, "GET", "/api/forum-posts", None).await;
    assert_eq!(status, 503);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("database not configured"));

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/forum-posts",
        Some(json!({ "title": "t", "author": "a", "tags": [] })),
    )
    .await;
    assert_eq!(status, 503);
}

#[tokio::test]
async fn created_post_starts_empty_and_is_listed() {
    let app = app(forum_state().await);

    let (status, created) = send_json(
        &app,
        "POST",
        "/api/forum-posts",
        Some(json!({
            "title": "Best drip irrigation setup?",
            "author": "asha",
            "tags": ["irrigation", "water"],
        })),
    )
    .await;

    assert_eq!(status, 201);
    assert_eq!(created["title"], "Best drip irrigation setup?");
    assert_eq!(created["likeCount"], 0);
    assert_eq!(created["replyCount"], 0);
    assert_eq!(created["tags"][1], "water");
    assert!(created["id"].as_str().is_some());

    let (status, posts) = send_json(&app, "GET", "/api/forum-posts", None).await;
    assert_eq!(status, 200);
    assert_eq!(posts.as_array().expect("post list").len(), 1);
}

#[tokio::test]
async fn commenting_raises_the_reply_count_by_one() {
    let app = app(forum_state().await);

    let (_, created) = send_json(
        &app,
        "POST",
        "/api/forum-posts",
        Some(json!({ "title": "Aphids on okra", "author": "ravi", "tags": ["pests"] })),
    )
    .await;
    let post_id = created["id"].as_str().expect("post id");

    let (status, updated) = send_json(
        &app,
        "POST",
        &format!("/api/forum-posts/{post_id}/comments"),
        Some(json!({ "author": "meena", "comment": "Neem oil twice a week." })),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(updated["replyCount"], 1);
    assert_eq!(updated["comments"][0]["text"], "Neem oil twice a week.");
    assert!(updated["comments"][0]["id"].as_str().is_some());
}

#[tokio::test]
async fn reply_lands_only_under_the_addressed_comment() {
    let app = app(forum_state().await);

    let (_, created) = send_json(
        &app,
        "POST",
        "/api/forum-posts",
        Some(json!({ "title": "Soil testing labs", "author": "asha", "tags": [] })),
    )
    .await;
    let post_id = created["id"].as_str().expect("post id").to_string();

    let (_, with_first) = send_json(
        &app,
        "POST",
        &format!("/api/forum-posts/{post_id}/comments"),
        Some(json!({ "author": "ravi", "comment": "Any in Ludhiana?" })),
    )
    .await;
    send_json(
        &app,
        "POST",
        &format!("/api/forum-posts/{post_id}/comments"),
        Some(json!({ "author": "meena", "comment": "University labs are cheap." })),
    )
    .await;

    let first_comment_id = with_first["comments"][0]["id"].as_str().expect("comment id");
    let (status, updated) = send_json(
        &app,
        "POST",
        &format!("/api/forum-posts/{post_id}/comments/{first_comment_id}/reply"),
        Some(json!({ "author": "asha", "comment": "PAU runs one." })),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(updated["comments"][0]["replies"][0]["text"], "PAU runs one.");
    assert_eq!(
        updated["comments"][1]["replies"].as_array().expect("replies").len(),
        0
    );
}

#[tokio::test]
async fn unknown_post_and_comment_are_404() {
    let app = app(forum_state().await);

    let missing = uuid::Uuid::now_v7();
    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/api/forum-posts/{missing}/comments"),
        Some(json!({ "author": "a", "comment": "hello" })),
    )
    .await;
    assert_eq!(status, 404);

    let (_, created) = send_json(
        &app,
        "POST",
        "/api/forum-posts",
        Some(json!({ "title": "t", "author": "a", "tags": [] })),
    )
    .await;
    let post_id = created["id"].as_str().expect("post id");
    let stray_comment = uuid::Uuid::now_v7();

    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/api/forum-posts/{post_id}/comments/{stray_comment}/reply"),
        Some(json!({ "author": "a", "comment": "hello" })),
    )
    .await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn likes_accumulate_in_place() {
    let app = app(forum_state().await);

    let (_, created) = send_json(
        &app,
        "POST",
        "/api/forum-posts",
        Some(json!({ "title": "Harvest photos", "author": "ravi", "tags": [] })),
    )
    .await;
    let post_id = created["id"].as_str().expect("post id");

    send_json(&app, "POST", &format!("/api/forum-posts/{post_id}/like"), None).await;
    let (status, updated) =
        send_json(&app, "POST", &format!("/api/forum-posts/{post_id}/like"), None).await;

    assert_eq!(status, 200);
    assert_eq!(updated["likeCount"], 2);
}

#[tokio::test]
async fn blank_comment_author_is_rejected() {
    let app = app(forum_state().await);

    let (_, created) = send_json(
        &app,
        "POST",
        "/api/forum-posts",
        Some(json!({ "title": "t", "author": "a", "tags": [] })),
    )
    .await;
    let post_id = created["id"].as_str().expect("post id");

    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/api/forum-posts/{post_id}/comments"),
        Some(json!({ "author": "   ", "comment": "hello" })),
    )
    .await;
    assert_eq!(status, 400);
}
