//! # API Error Types
//!
//! Every failure leaves the service as the same two-field document,
//! `{"success": false, "error": "<message>"}`, so clients that already
//! understand the roadmap endpoints need no second error format.
//! Internal error details are logged and never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use aiact_core::Quarter;

/// JSON error document returned by every endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StubErrorBody {
    /// Always `false`.
    pub success: bool,
    /// Human-readable error message.
    pub error: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// The route exists but does not accept this method (405).
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Path parameter is not one of the five roadmap quarters (400).
    /// Carries the rejected value for logging.
    #[error("invalid quarter: {0}")]
    InvalidQuarter(String),

    /// No route matches the path (404).
    #[error("Not found")]
    NotFound,

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidQuarter(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    fn public_message(&self) -> String {
        match self {
            Self::InvalidQuarter(_) => invalid_quarter_message(),
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

/// `Invalid quarter parameter. Valid values: Q3-2025, ..., Future`.
pub fn invalid_quarter_message() -> String {
    let valid: Vec<&str> = Quarter::all().iter().map(Quarter::as_str).collect();
    format!("Invalid quarter parameter. Valid values: {}", valid.join(", "))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::InvalidQuarter(q) => tracing::debug!(quarter = %q, "rejected quarter parameter"),
            _ => {}
        }

        let body = StubErrorBody {
            success: false,
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<aiact_roadmap::CatalogError> for AppError {
    fn from(err: aiact_roadmap::CatalogError) -> Self {
        Self::Internal(err.to_string())
    }
}
