//! # OpenAPI Specification Assembly
//!
//! Collects the utoipa-documented handlers into one OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::routes::method_not_allowed;
use crate::state::AppState;

/// OpenAPI document for the whole API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Basic Act Compliance Platform API",
        description = "Roadmap listing and demonstration compliance endpoints.\n\nThe compliance, risk and sync endpoints return fixed documents; only `timestamp` varies. Every route accepts a single method. Errors use `{success: false, error}`.",
        license(name = "BUSL-1.1")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::routes::roadmap::index,
        crate::routes::roadmap::by_quarter,
        crate::routes::roadmap::sync,
        crate::routes::compliance::check,
        crate::routes::risk::score,
    ),
    components(schemas(
        crate::error::StubErrorBody,
        crate::routes::roadmap::SyncResponse,
        crate::routes::compliance::ComplianceCheckResponse,
        crate::routes::compliance::ComplianceIssue,
        crate::routes::risk::RiskScoreResponse,
    )),
    tags(
        (name = "roadmap", description = "Public product roadmap"),
        (name = "compliance", description = "Compliance check (demonstration)"),
        (name = "risk", description = "Risk score (demonstration)"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json).fallback(method_not_allowed))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_generates_with_package_version() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "AI Basic Act Compliance Platform API");
        assert_eq!(spec.info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn spec_has_every_stub_path() {
        let spec = ApiDoc::openapi();
        for path in [
            "/api/roadmap",
            "/api/roadmap/{quarter}",
            "/api/roadmap/sync",
            "/api/compliance/check",
            "/api/risk/score",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn spec_registers_error_schema() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("components present");
        assert!(components.schemas.contains_key("StubErrorBody"));
    }
}
