//! # Risk Score
//!
//! `GET /api/risk/score` returns a fixed moderate-risk assessment.

use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use aiact_core::Timestamp;

use super::method_not_allowed;
use crate::state::AppState;

/// Risk assessment.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RiskScoreResponse {
    /// `low`, `moderate` or `high`.
    pub risk_level: String,
    /// Confidence in the assessment, 0 to 1.
    pub confidence: f64,
    pub factors: Vec<String>,
    /// `factors` in Korean, same order.
    pub factors_ko: Vec<String>,
    pub timestamp: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/risk/score", get(score).fallback(method_not_allowed))
}

/// GET /api/risk/score: Fixed risk assessment.
#[utoipa::path(
    get,
    path = "/api/risk/score",
    responses(
        (status = 200, description = "Risk assessment", body = RiskScoreResponse),
        (status = 405, description = "Method not allowed", body = crate::error::StubErrorBody),
    ),
    tag = "risk"
)]
async fn score() -> Json<RiskScoreResponse> {
    Json(RiskScoreResponse {
        risk_level: "moderate".to_string(),
        confidence: 0.62,
        factors: vec![
            "model transparency".to_string(),
            "training dataset clarity".to_string(),
        ],
        factors_ko: vec!["모델 투명성".to_string(), "학습 데이터셋 명확성".to_string()],
        timestamp: Timestamp::now().to_iso8601(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router<()> {
        router().with_state(AppState::builtin().unwrap())
    }

    #[tokio::test]
    async fn score_returns_fixed_assessment() {
        let req = Request::builder()
            .uri("/api/risk/score")
            .body(Body::empty())
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body: RiskScoreResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.risk_level, "moderate");
        assert_eq!(body.confidence, 0.62);
        assert_eq!(body.factors, ["model transparency", "training dataset clarity"]);
        assert_eq!(body.factors_ko, ["모델 투명성", "학습 데이터셋 명확성"]);
        assert!(Timestamp::parse(&body.timestamp).is_ok());
    }

    #[tokio::test]
    async fn post_is_rejected() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/risk/score")
            .body(Body::from("{}"))
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
