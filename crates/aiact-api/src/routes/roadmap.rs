//! # Roadmap API
//!
//! - `GET /api/roadmap`: whole catalog grouped into the five quarters,
//!   with the workstream and status lists.
//! - `GET /api/roadmap/:quarter`: entries of one quarter, in catalog order.
//! - `POST /api/roadmap/sync`: GitHub sync, disabled in this release.
//!
//! `/api/roadmap/sync` is a static route and wins over `:quarter`, so a
//! `GET` to it is a 405 rather than an invalid-quarter 400.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use aiact_core::{Quarter, RoadmapStatus, Timestamp};
use aiact_roadmap::{group_by_quarter, QuarterGroups, RoadmapEntry};

use super::method_not_allowed;
use crate::error::AppError;
use crate::state::AppState;

/// Message returned by the sync endpoint.
pub const SYNC_DISABLED_MESSAGE: &str = "GitHub sync disabled in initial release.";

#[derive(Debug, Serialize)]
struct RoadmapIndexResponse<'a> {
    success: bool,
    data: RoadmapIndexData<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoadmapIndexData<'a> {
    quarters: QuarterGroups<'a>,
    workstreams: &'a [String],
    statuses: &'a [RoadmapStatus],
    total_items: usize,
}

#[derive(Debug, Serialize)]
struct QuarterResponse<'a> {
    success: bool,
    quarter: &'a str,
    data: Vec<&'a RoadmapEntry>,
    count: usize,
}

/// Sync request outcome.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SyncResponse {
    /// Always `false`.
    pub synced: bool,
    pub message: String,
    pub timestamp: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/roadmap", get(index).fallback(method_not_allowed))
        .route("/api/roadmap/sync", post(sync).fallback(method_not_allowed))
        .route(
            "/api/roadmap/:quarter",
            get(by_quarter).fallback(method_not_allowed),
        )
}

/// GET /api/roadmap: Full roadmap grouped by quarter.
#[utoipa::path(
    get,
    path = "/api/roadmap",
    responses(
        (status = 200, description = "Roadmap grouped by quarter: `{success, data: {quarters, workstreams, statuses, totalItems}}`"),
        (status = 405, description = "Method not allowed", body = crate::error::StubErrorBody),
    ),
    tag = "roadmap"
)]
async fn index(State(state): State<AppState>) -> Response {
    let catalog = state.catalog.as_ref();
    let body = RoadmapIndexResponse {
        success: true,
        data: RoadmapIndexData {
            quarters: group_by_quarter(catalog),
            workstreams: catalog.workstreams(),
            statuses: catalog.statuses(),
            total_items: catalog.len(),
        },
    };
    Json(body).into_response()
}

/// GET /api/roadmap/:quarter: Entries of one quarter.
#[utoipa::path(
    get,
    path = "/api/roadmap/{quarter}",
    params(("quarter" = String, Path, description = "Q3-2025, Q4-2025, Q1-2026, Q2-2026 or Future")),
    responses(
        (status = 200, description = "Entries of the quarter: `{success, quarter, data, count}`"),
        (status = 400, description = "Unknown quarter", body = crate::error::StubErrorBody),
        (status = 405, description = "Method not allowed", body = crate::error::StubErrorBody),
    ),
    tag = "roadmap"
)]
async fn by_quarter(
    State(state): State<AppState>,
    quarter: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(quarter) = quarter.map_err(|e| AppError::InvalidQuarter(e.body_text()))?;
    let quarter = Quarter::known(&quarter).ok_or(AppError::InvalidQuarter(quarter))?;
    let data = state.catalog.in_quarter(&quarter);
    let body = QuarterResponse {
        success: true,
        quarter: quarter.as_str(),
        count: data.len(),
        data,
    };
    Ok(Json(body).into_response())
}

/// POST /api/roadmap/sync: Disabled; the request body is ignored.
#[utoipa::path(
    post,
    path = "/api/roadmap/sync",
    responses(
        (status = 200, description = "Sync is disabled", body = SyncResponse),
        (status = 405, description = "Method not allowed", body = crate::error::StubErrorBody),
    ),
    tag = "roadmap"
)]
async fn sync() -> Json<SyncResponse> {
    tracing::info!("roadmap sync requested while disabled");
    Json(SyncResponse {
        synced: false,
        message: SYNC_DISABLED_MESSAGE.to_string(),
        timestamp: Timestamp::now().to_iso8601(),
    })
}
