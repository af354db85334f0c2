//! # Compliance Check
//!
//! `GET /api/compliance/check` returns a fixed report: score 72 and two
//! open issues. No evaluation happens; only `timestamp` varies.

use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use aiact_core::Timestamp;
use aiact_roadmap::trust::COMPLIANCE_SCORE;

use super::method_not_allowed;
use crate::state::AppState;

/// Compliance check report.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComplianceCheckResponse {
    /// Overall score, 0 to 100.
    pub compliance_score: u8,
    pub issues: Vec<ComplianceIssue>,
    /// Always `ok`.
    pub status: String,
    /// Generation time, ISO 8601 UTC with milliseconds.
    pub timestamp: String,
}

/// One finding in the compliance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ComplianceIssue {
    pub id: String,
    /// `low`, `medium` or `high`.
    pub severity: String,
    pub message: String,
    pub message_ko: String,
}

impl ComplianceIssue {
    fn new(id: &str, severity: &str, message: &str, message_ko: &str) -> Self {
        Self {
            id: id.to_string(),
            severity: severity.to_string(),
            message: message.to_string(),
            message_ko: message_ko.to_string(),
        }
    }
}

/// The issues every report carries.
pub fn reported_issues() -> Vec<ComplianceIssue> {
    vec![
        ComplianceIssue::new(
            "A-120",
            "medium",
            "Dataset provenance incomplete",
            "데이터셋 출처 정보 불완전",
        ),
        ComplianceIssue::new(
            "B-032",
            "low",
            "Missing documentation link",
            "문서 링크 누락",
        ),
    ]
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/compliance/check",
        get(check).fallback(method_not_allowed),
    )
}

/// GET /api/compliance/check: Fixed compliance report.
#[utoipa::path(
    get,
    path = "/api/compliance/check",
    responses(
        (status = 200, description = "Compliance report", body = ComplianceCheckResponse),
        (status = 405, description = "Method not allowed", body = crate::error::StubErrorBody),
    ),
    tag = "compliance"
)]
async fn check() -> Json<ComplianceCheckResponse> {
    Json(ComplianceCheckResponse {
        compliance_score: COMPLIANCE_SCORE,
        issues: reported_issues(),
        status: "ok".to_string(),
        timestamp: Timestamp::now().to_iso8601(),
    })
}
