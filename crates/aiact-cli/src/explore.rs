//! # Explore CLI: Call the demonstration API endpoints.
//!
//! Without an endpoint, lists the five endpoints with their descriptions.
//! With one, sends the request and prints the pretty-printed JSON response,
//! whatever its status code. A network or decode failure is printed as
//! `Error: <detail>`; it is not a command failure.
//!
//! ```bash
//! aiact explore
//! aiact explore /api/roadmap/Q3-2025
//! aiact explore /api/roadmap/sync --base-url http://localhost:8080
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use reqwest::Method;

use aiact_core::{localize, BilingualText, Language};

/// Default API location, matching the server's default port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One listed endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: BilingualText,
}

/// The endpoints offered by the explorer, in display order.
pub fn endpoints() -> Vec<Endpoint> {
    let ep = |method: &'static str, path: &'static str, ko: &str, en: &str| Endpoint {
        method,
        path,
        description: BilingualText::new(ko, en),
    };
    vec![
        ep("GET", "/api/roadmap", "전체 로드맵 데이터 조회", "Retrieve full roadmap data"),
        ep(
            "GET",
            "/api/roadmap/Q3-2025",
            "특정 분기 로드맵 조회",
            "Retrieve roadmap for specific quarter",
        ),
        ep("POST", "/api/roadmap/sync", "GitHub 동기화 (비활성화)", "GitHub sync (disabled)"),
        ep("GET", "/api/compliance/check", "AI 기본법 준수 점검", "Check AI Basic Act compliance"),
        ep("GET", "/api/risk/score", "위험 점수 평가", "Assess risk score"),
    ]
}

/// Explore subcommand arguments.
#[derive(Args, Debug)]
pub struct ExploreArgs {
    /// Endpoint path to call, e.g. `/api/risk/score`. Lists the endpoints
    /// when omitted.
    pub endpoint: Option<String>,

    /// Base URL of the API server.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP method. Defaults to the listed method, or GET for unlisted paths.
    #[arg(long)]
    pub method: Option<String>,

    /// Display language.
    #[arg(long, default_value = "ko")]
    pub lang: Language,
}

/// Execute the explore subcommand.
pub fn run_explore(args: &ExploreArgs) -> Result<u8> {
    let Some(path) = &args.endpoint else {
        print!("{}", render_endpoints(args.lang));
        return Ok(0);
    };
    let method = args
        .method
        .clone()
        .unwrap_or_else(|| listed_method(path).to_string());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let output = runtime.block_on(call_endpoint(&args.base_url, &method, path));

    println!("{method} {path}");
    println!("{output}");
    Ok(0)
}

/// Text listing of [`endpoints`] in `lang`.
pub fn render_endpoints(lang: Language) -> String {
    let heading = lang.pick("사용 가능한 엔드포인트", "Available Endpoints");
    let lines: String = endpoints()
        .iter()
        .map(|ep| {
            format!(
                "  {:<5} {}\n        {}\n",
                ep.method,
                ep.path,
                localize(&ep.description, lang)
            )
        })
        .collect();
    format!("{heading}\n{lines}")
}

/// Method listed for `path`, or GET when the path is not listed.
pub fn listed_method(path: &str) -> &'static str {
    endpoints()
        .into_iter()
        .find(|ep| ep.path == path)
        .map(|ep| ep.method)
        .unwrap_or("GET")
}

/// Send `method path` to `base_url` and return the response as pretty
/// JSON, or `Error: <detail>` when no JSON response could be obtained.
pub async fn call_endpoint(base_url: &str, method: &str, path: &str) -> String {
    match fetch_json(base_url, method, path).await {
        Ok(value) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|e| format!("Error: {e}")),
        Err(e) => {
            tracing::debug!(error = %e, "explore request failed");
            format!("Error: {e:#}")
        }
    }
}

async fn fetch_json(base_url: &str, method: &str, path: &str) -> Result<serde_json::Value> {
    let method = Method::from_bytes(method.to_uppercase().as_bytes())
        .with_context(|| format!("invalid HTTP method '{method}'"))?;
    let url = format!("{}{}", base_url.trim_end_matches('/'), path);

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("failed to build HTTP client")?;

    let response = client
        .request(method, &url)
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;
    tracing::debug!(status = %response.status(), %url, "explore response");

    response
        .json::<serde_json::Value>()
        .await
        .context("response is not JSON")
}
