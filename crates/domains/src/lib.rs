//! # domains
//!
//! Core models, error taxonomy, and port traits for Farmhub.
//! Adapters (storage, upstream services, web) depend on this crate and
//! never the other way around.

pub mod error;
pub mod models;
pub mod ports;
pub mod provision;

pub use error::{AppError, Result};
pub use provision::Provisioned;
