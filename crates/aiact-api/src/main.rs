//! AI Basic Act compliance platform API server.
//!
//! Configuration comes from the environment: `AIACT_PORT` (default 8080),
//! `AIACT_CATALOG` (optional catalog document; the built-in catalog is
//! served otherwise), `AIACT_METRICS_ENABLED` and `RUST_LOG`.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use aiact_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let port = config.port;
    let state = AppState::from_config(config).context("failed to load roadmap catalog")?;
    tracing::info!(
        entries = state.catalog.len(),
        source = ?state.config.catalog_path,
        metrics = state.config.metrics_enabled,
        "roadmap catalog loaded"
    );

    let app = aiact_api::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("aiact-api listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;
    Ok(())
}
