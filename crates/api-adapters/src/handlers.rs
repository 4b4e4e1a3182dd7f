//! # HTTP Handlers
//!
//! Thin request/response shaping: validate the payload, pattern-match the
//! required dependency out of the state, delegate, serialize.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use domains::models::{CropObservation, ForumPost, MarketQuery, MonthPlan, ResourceKind};
use domains::AppError;
use services::{analyze, forum::ForumService, plan, validate};

use crate::error::ApiError;
use crate::AppState;

const FORECAST_DAYS: u8 = 7;

// ── Health ───────────────────────────────────────────────────────────────────

fn flag(configured: bool) -> &'static str {
    if configured {
        "configured"
    } else {
        "not configured"
    }
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "services": {
            "server": "running",
            "database": flag(state.forum.is_configured()),
            "llm": flag(state.llm.is_configured()),
            "weather": flag(state.weather.is_configured()),
            "market": flag(state.market.is_configured()),
        },
        "endpoints": [
            "GET  /api/health",
            "GET  /api/forum-posts",
            "POST /api/forum-posts",
            "POST /api/forum-posts/{id}/comments",
            "POST /api/forum-posts/{postId}/comments/{commentId}/reply",
            "POST /api/forum-posts/{id}/like",
            "POST /api/analyze",
            "POST /api/resources",
            "GET  /api/weather/{location}",
            "GET  /api/market-prices",
        ],
    }))
}

// ── Forum ────────────────────────────────────────────────────────────────────

const FORUM_DOWN: (&str, &str) = ("forum service", "database not configured");

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub author: String,
    pub comment: String,
}

pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ForumPost>>, ApiError> {
    let repo = state.forum.require(FORUM_DOWN.0, FORUM_DOWN.1)?;
    let posts = ForumService::new(repo.clone()).list_posts().await?;
    Ok(Json(posts))
}

pub async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<ForumPost>), ApiError> {
    let repo = state.forum.require(FORUM_DOWN.0, FORUM_DOWN.1)?;
    let post = ForumService::new(repo.clone())
        .create_post(request.title, request.author, request.tags)
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    Json(request): Json<CommentRequest>,
) -> Result<Json<ForumPost>, ApiError> {
    let repo = state.forum.require(FORUM_DOWN.0, FORUM_DOWN.1)?;
    let post = ForumService::new(repo.clone())
        .add_comment(post_id, request.author, request.comment)
        .await?;
    Ok(Json(post))
}

pub async fn add_reply(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<CommentRequest>,
) -> Result<Json<ForumPost>, ApiError> {
    let repo = state.forum.require(FORUM_DOWN.0, FORUM_DOWN.1)?;
    let post = ForumService::new(repo.clone())
        .add_reply(post_id, comment_id, request.author, request.comment)
        .await?;
    Ok(Json(post))
}

pub async fn like_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<ForumPost>, ApiError> {
    let repo = state.forum.require(FORUM_DOWN.0, FORUM_DOWN.1)?;
    let post = ForumService::new(repo.clone()).like_post(post_id).await?;
    Ok(Json(post))
}

// ── Crop health analysis ─────────────────────────────────────────────────────

/// Free-text response: the LLM output is relayed verbatim for the dashboard
/// to render.
pub async fn analyze_crop(
    State(state): State<AppState>,
    Json(observation): Json<CropObservation>,
) -> Result<String, ApiError> {
    let client = state
        .llm
        .require("AI analysis service", "LLM API key not configured")?;
    let text = analyze::analyze_crop(client.as_ref(), &observation).await?;
    Ok(text)
}

// ── Seasonal resource plan ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub crop: String,
    pub location: String,
    pub start_date: String,
    #[serde(default)]
    pub resources: Vec<ResourceKind>,
    #[serde(default)]
    pub farm_size: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan: Vec<MonthPlan>,
}

pub async fn resource_plan(
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    validate::validate_plan_request(
        &request.crop,
        &request.location,
        &request.start_date,
        &request.resources,
        request.farm_size,
    )?;

    let year = validate::plan_year(&request.start_date, Utc::now().year());
    let plan = plan::build_plan(year, &request.resources);
    Ok(Json(PlanResponse { plan }))
}

// ── Weather outlook ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct WeatherReport {
    pub location: domains::models::GeocodedLocation,
    pub days: Vec<domains::models::ForecastDay>,
}

pub async fn weather_outlook(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<Json<WeatherReport>, ApiError> {
    if location.trim().is_empty() {
        return Err(AppError::InvalidInput("location must not be empty".to_string()).into());
    }

    let provider = state
        .weather
        .require("weather service", "weather API key not configured")?;
    let resolved = provider.geocode(&location).await?;
    let days = provider.forecast(resolved.coordinates, FORECAST_DAYS).await?;

    Ok(Json(WeatherReport {
        location: resolved,
        days,
    }))
}

// ── Market prices ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MarketPricesParams {
    pub commodity: Option<String>,
    pub state: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct MarketPricesResponse {
    pub records: Vec<domains::models::MarketRecord>,
}

pub async fn market_prices(
    State(state): State<AppState>,
    Query(params): Query<MarketPricesParams>,
) -> Result<Json<MarketPricesResponse>, ApiError> {
    let source = state
        .market
        .require("market price service", "market data API key not configured")?;

    let query = MarketQuery {
        commodity: params.commodity,
        state: params.state,
        limit: params.limit,
    };
    let records = source.latest_prices(&query).await?;
    Ok(Json(MarketPricesResponse { records }))
}

// ── Metrics ──────────────────────────────────────────────────────────────────

pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let body = state
        .metrics
        .encode()
        .map_err(|err| AppError::Internal(format!("metrics encoding failed: {err}")))?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    ))
}
