//! # Core Traits (Ports)
//!
//! Any adapter must implement these traits to be wired into the binary.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{
    Comment, Coordinates, ForecastDay, ForumPost, GeocodedLocation, MarketQuery, MarketRecord,
    Reply,
};

/// Persistence contract for forum posts, comments, and replies.
///
/// Every mutation is atomic at the store; callers never fetch-mutate-save.
/// Mutations return the updated post aggregate.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ForumRepo: Send + Sync {
    /// All posts, most recent first.
    async fn list_posts(&self) -> Result<Vec<ForumPost>>;

    async fn create_post(&self, post: ForumPost) -> Result<ForumPost>;

    /// Appends a comment to the post, or fails with NotFound.
    async fn append_comment(&self, post_id: Uuid, comment: Comment) -> Result<ForumPost>;

    /// Appends a reply to the identified comment, or fails with NotFound if
    /// either the post or the comment is absent.
    async fn append_reply(&self, post_id: Uuid, comment_id: Uuid, reply: Reply)
        -> Result<ForumPost>;

    /// Increments the post's like count in place.
    async fn increment_likes(&self, post_id: Uuid) -> Result<ForumPost>;
}

/// A single-prompt completion against an LLM provider.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one free-text prompt and returns the completion text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Weather lookup: a location string resolves to coordinates, then
/// coordinates resolve to a multi-day forecast.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn geocode(&self, location: &str) -> Result<GeocodedLocation>;

    async fn forecast(&self, coordinates: Coordinates, days: u8) -> Result<Vec<ForecastDay>>;
}

/// Wholesale market price lookup.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn latest_prices(&self, query: &MarketQuery) -> Result<Vec<MarketRecord>>;
}
