//! # upstream-adapters
//!
//! HTTP clients for the external services Farmhub proxies: the LLM
//! provider, the weather provider, and the government market-data API.
//! Each implements a `domains` port; none retries or recovers — failures
//! surface to the caller as upstream errors.

pub mod llm;
pub mod market;
pub mod weather;

pub use llm::GroqChatClient;
pub use market::DataGovMarketClient;
pub use weather::WeatherApiClient;

use domains::AppError;

fn upstream(err: reqwest::Error) -> AppError {
    AppError::Upstream(err.to_string())
}
