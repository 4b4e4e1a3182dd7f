//! # api-adapters
//!
//! The web routing and orchestration layer for Farmhub: the shared
//! application state, the route table, and the HTTP mapping of the domain
//! error taxonomy.

pub mod error;
pub mod handlers;
pub mod metrics;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domains::ports::{CompletionClient, ForecastProvider, ForumRepo, MarketDataSource};
use domains::Provisioned;

use metrics::HttpMetrics;

/// State shared across all request handlers. Each external dependency is
/// either configured at startup or absent for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub forum: Provisioned<Arc<dyn ForumRepo>>,
    pub llm: Provisioned<Arc<dyn CompletionClient>>,
    pub weather: Provisioned<Arc<dyn ForecastProvider>>,
    pub market: Provisioned<Arc<dyn MarketDataSource>>,
    pub metrics: Arc<HttpMetrics>,
}

impl AppState {
    pub fn new(
        forum: Provisioned<Arc<dyn ForumRepo>>,
        llm: Provisioned<Arc<dyn CompletionClient>>,
        weather: Provisioned<Arc<dyn ForecastProvider>>,
        market: Provisioned<Arc<dyn MarketDataSource>>,
    ) -> Self {
        Self {
            forum,
            llm,
            weather,
            market,
            metrics: Arc::new(HttpMetrics::new()),
        }
    }
}

/// Builds the application router. The dashboard is served from another
/// origin, so CORS stays permissive.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/health", get(handlers::health))
        .route(
            "/api/forum-posts",
            get(handlers::list_posts).post(handlers::create_post),
        )
        .route(
            "/api/forum-posts/{post_id}/comments",
            post(handlers::add_comment),
        )
        .route(
            "/api/forum-posts/{post_id}/comments/{comment_id}/reply",
            post(handlers::add_reply),
        )
        .route("/api/forum-posts/{post_id}/like", post(handlers::like_post))
        .route("/api/analyze", post(handlers::analyze_crop))
        .route("/api/resources", post(handlers::resource_plan))
        .route("/api/weather/{location}", get(handlers::weather_outlook))
        .route("/api/market-prices", get(handlers::market_prices))
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            metrics::track_requests,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
