//! # integration-tests
//!
//! Shared fixtures for the router-level test suite: state builders with
//! every dependency unconfigured by default, and request helpers that
//! drive the router in-process.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use api_adapters::{router, AppState};
use domains::ports::{CompletionClient, ForecastProvider, ForumRepo, MarketDataSource};
use domains::Provisioned;
use storage_adapters::SqliteForumRepo;

/// State with every external dependency absent.
pub fn bare_state() -> AppState {
    AppState::new(
        Provisioned::Unconfigured,
        Provisioned::Unconfigured,
        Provisioned::Unconfigured,
        Provisioned::Unconfigured,
    )
}

/// State with an in-memory forum store and nothing else.
pub async fn forum_state() -> AppState {
    let repo = SqliteForumRepo::connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    let mut state = bare_state();
    state.forum = Provisioned::Configured(Arc::new(repo) as Arc<dyn ForumRepo>);
    state
}

pub fn with_llm(mut state: AppState, client: Arc<dyn CompletionClient>) -> AppState {
    state.llm = Provisioned::Configured(client);
    state
}

pub fn with_weather(mut state: AppState, provider: Arc<dyn ForecastProvider>) -> AppState {
    state.weather = Provisioned::Configured(provider);
    state
}

pub fn with_market(mut state: AppState, source: Arc<dyn MarketDataSource>) -> AppState {
    state.market = Provisioned::Configured(source);
    state
}

pub fn app(state: AppState) -> Router {
    router(state)
}

/// Sends one request and returns the status plus the raw body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request builds"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request builds"),
    };

    let response = app.clone().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

/// Sends one request and parses the body as JSON.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, text) = send(app, method, uri, body).await;
    let value = serde_json::from_str(&text).unwrap_or(Value::Null);
    (status, value)
}
