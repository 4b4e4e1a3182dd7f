//! Health endpoint reports per-service configuration flags.

use integration_tests::{app, bare_state, forum_state, send_json};

#[tokio::test]
async fn health_reports_unconfigured_services() {
    let app = app(bare_state());
    let (status, body) = send_json(&app, "GET", "/api/health", None).await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["server"], "running");
    assert_eq!(body["services"]["database"], "not configured");
    assert_eq!(body["services"]["llm"], "not configured");
    assert_eq!(body["services"]["weather"], "not configured");
    assert_eq!(body["services"]["market"], "not configured");
}

#[tokio::test]
async fn health_reflects_a_configured_store() {
    let app = app(forum_state().await);
    let (status, body) = send_json(&app, "GET", "/api/health", None).await;

    assert_eq!(status, 200);
    assert_eq!(body["services"]["database"], "configured");
    assert!(body["endpoints"]
        .as_array()
        .expect("endpoint list")
        .iter()
        .any(|entry| entry.as_str() == Some("POST /api/resources")));
}

#[tokio::test]
async fn metrics_endpoint_serves_text_exposition() {
    let app = app(bare_state());

    // Drive one request so the counter family has something to show.
    send_json(&app, "GET", "/api/health", None).await;
    let (status, body) = integration_tests::send(&app, "GET", "/metrics", None).await;

    assert_eq!(status, 200);
    assert!(body.contains("http_requests"));
}
