//! # aiact-cli: Command-Line Shell for the Compliance Platform
//!
//! Provides the `aiact` command. Every view is rendered in Korean or
//! English (`--lang ko|en`, Korean by default); the language only selects
//! which half of each bilingual pair is shown and never changes what is
//! selected.
//!
//! ## Subcommands
//!
//! - `aiact roadmap`: filtered roadmap grouped by quarter, with the status
//!   summary.
//! - `aiact trust`: trust-center overview, service health, deployments and
//!   recent commits.
//! - `aiact catalog validate`: check a roadmap catalog document.
//! - `aiact explore`: list the demonstration API endpoints or call one.
//!
//! ```bash
//! aiact roadmap --tab Q4-2025 --status Planned --lang en
//! aiact trust
//! aiact explore /api/risk/score --base-url http://localhost:8080
//! ```

pub mod catalog;
pub mod explore;
pub mod roadmap;
pub mod trust;

use std::path::Path;

use anyhow::{Context, Result};

use aiact_roadmap::Catalog;

/// Load the catalog at `path`, or the built-in catalog when `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Catalog::builtin().context("built-in catalog is invalid"),
    }
}
