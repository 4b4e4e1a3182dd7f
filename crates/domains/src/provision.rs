//! # Provisioned
//!
//! An external dependency is either configured at startup or absent for the
//! whole process lifetime. Handlers pattern-match instead of null-checking;
//! the Unconfigured arm maps to a 503.

use crate::error::{AppError, Result};

/// A dependency that may not have been configured.
#[derive(Debug, Clone)]
pub enum Provisioned<T> {
    Configured(T),
    Unconfigured,
}

impl<T> Provisioned<T> {
    /// Builds from the optional output of adapter construction.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Provisioned::Configured(v),
            None => Provisioned::Unconfigured,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Provisioned::Configured(_))
    }

    /// The configured value, or a ServiceUnavailable error naming the
    /// feature and what is missing.
    pub fn require(&self, service: &str, reason: &str) -> Result<&T> {
        match self {
            Provisioned::Configured(value) => Ok(value),
            Provisioned::Unconfigured => Err(AppError::unavailable(service, reason)),
        }
    }
}
