//! # AppError
//!
//! Centralized error handling for the Farmhub ecosystem.
//! Every failure surfaces directly to the HTTP caller as a status code plus
//! a short message; nothing is retried or recovered locally.

use thiserror::Error;

/// The primary error type for all domain operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed request data, rejected before any processing.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Referenced resource absent (e.g. forum post, comment, location).
    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),

    /// A required external dependency is not configured.
    #[error("{service} unavailable: {reason}")]
    ServiceUnavailable { service: String, reason: String },

    /// An external API call errored. Reported as-is, never retried.
    #[error("upstream failure: {0}")]
    Upstream(String),

    /// Infrastructure failure (e.g. database error).
    #[error("internal service error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn unavailable(service: &str, reason: &str) -> Self {
        AppError::ServiceUnavailable {
            service: service.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// A specialized Result type for Farmhub logic.
pub type Result<T> = std::result::Result<T, AppError>;
