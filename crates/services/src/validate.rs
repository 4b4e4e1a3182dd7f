//! # Request Validation
//!
//! Shape checks applied before any plan construction. The date check is
//! syntactic only: a well-formed string with an out-of-range month or day
//! is accepted.

use once_cell::sync::Lazy;
use regex::Regex;

use domains::models::ResourceKind;
use domains::{AppError, Result};

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Validates the resource-plan request fields. Errors carry the field name
/// so the caller gets an actionable 400.
pub fn validate_plan_request(
    crop: &str,
    location: &str,
    start_date: &str,
    resources: &[ResourceKind],
    farm_size: Option<f64>,
) -> Result<()> {
    if !NAME_PATTERN.is_match(crop) {
        return Err(AppError::InvalidInput(
            "crop name must contain only letters and spaces".to_string(),
        ));
    }
    if !NAME_PATTERN.is_match(location) {
        return Err(AppError::InvalidInput(
            "location must contain only letters and spaces".to_string(),
        ));
    }
    if !DATE_PATTERN.is_match(start_date) {
        return Err(AppError::InvalidInput(
            "start date must use the YYYY-MM-DD format".to_string(),
        ));
    }
    if resources.is_empty() {
        return Err(AppError::InvalidInput(
            "select at least one resource".to_string(),
        ));
    }
    if let Some(size) = farm_size {
        if size <= 0.0 {
            return Err(AppError::InvalidInput(
                "farm size must be positive".to_string(),
            ));
        }
    }
    Ok(())
}

/// The plan year comes from the leading four digits of the validated start
/// date; the fallback covers only callers that skipped validation.
pub fn plan_year(start_date: &str, fallback: i32) -> i32 {
    start_date
        .get(..4)
        .and_then(|year| year.parse().ok())
        .unwrap_or(fallback)
}
