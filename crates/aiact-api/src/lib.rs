//! # aiact-api: HTTP Services for the AI Basic Act Compliance Platform
//!
//! Serves the public roadmap and the demonstration compliance endpoints.
//!
//! ## Route Map
//!
//! | Path | Method | Handler |
//! |------|--------|---------|
//! | `/api/roadmap` | GET | catalog grouped by quarter |
//! | `/api/roadmap/:quarter` | GET | entries of one quarter |
//! | `/api/roadmap/sync` | POST | disabled GitHub sync |
//! | `/api/compliance/check` | GET | fixed compliance report |
//! | `/api/risk/score` | GET | fixed risk assessment |
//! | `/openapi.json` | GET | OpenAPI document |
//! | `/health/liveness` | GET | liveness probe |
//! | `/metrics` | GET | Prometheus scrape (when enabled) |
//!
//! Any other method on a known path is a 405 and any unknown path a 404;
//! both use the `{success: false, error}` document from [`error`].
//!
//! ## Middleware
//!
//! `TraceLayer` wraps every request. The Prometheus metrics middleware is
//! installed unless `AIACT_METRICS_ENABLED=false`.

pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::ApiMetrics;
use crate::routes::method_not_allowed;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();
    let metrics_on = state.config.metrics_enabled;

    let mut api = Router::new()
        .merge(routes::roadmap::router())
        .merge(routes::compliance::router())
        .merge(routes::risk::router())
        .merge(openapi::router())
        .route(
            "/health/liveness",
            get(liveness).fallback(method_not_allowed),
        );

    if metrics_on {
        api = api.route(
            "/metrics",
            get(prometheus_metrics).fallback(method_not_allowed),
        );
    }

    let mut api = api.fallback(routes::not_found);

    // Outermost → innermost: TraceLayer → metrics → handler.
    if metrics_on {
        api = api
            .layer(from_fn(middleware::metrics::metrics_middleware))
            .layer(Extension(metrics));
    }

    api.layer(TraceLayer::new_for_http()).with_state(state)
}

/// GET /metrics: Prometheus metrics scrape endpoint.
///
/// Refreshes the roadmap gauge from the catalog, then encodes every metric
/// in the Prometheus text exposition format.
async fn prometheus_metrics(
    State(state): State<AppState>,
    Extension(metrics): Extension<ApiMetrics>,
) -> impl IntoResponse {
    metrics.observe_catalog(&state.catalog);

    match metrics.gather_and_encode() {
        Ok(body) => (
            StatusCode::OK,
            [(
                axum::http::header::CONTENT_TYPE,
                "text/plain; version=0.0.4; charset=utf-8",
            )],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to encode Prometheus metrics: {e}");
            error::AppError::Internal(e).into_response()
        }
    }
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}
