//! # services
//!
//! Business logic between the domain models and the adapters: the seasonal
//! advice rules, the 12-month plan builder, request validation, and the
//! forum and crop-analysis services.

pub mod advice;
pub mod analyze;
pub mod forum;
pub mod plan;
pub mod validate;
