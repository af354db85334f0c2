//! # API Route Modules
//!
//! - `roadmap`: roadmap listing, roadmap-by-quarter and the disabled
//!   GitHub sync.
//! - `compliance`: fixed compliance-check report.
//! - `risk`: fixed risk-score assessment.
//!
//! Every route accepts exactly one method. Other methods reach
//! [`method_not_allowed`] through the method router's fallback.

pub mod compliance;
pub mod risk;
pub mod roadmap;

use crate::error::AppError;

/// Method fallback shared by every route.
pub(crate) async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Router fallback for paths no route matches.
pub(crate) async fn not_found() -> AppError {
    AppError::NotFound
}
