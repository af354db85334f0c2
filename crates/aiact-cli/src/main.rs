//! # aiact CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aiact_cli::catalog::{run_catalog, CatalogArgs};
use aiact_cli::explore::{run_explore, ExploreArgs};
use aiact_cli::roadmap::{run_roadmap, RoadmapArgs};
use aiact_cli::trust::{run_trust, TrustArgs};

/// AI Basic Act compliance platform CLI
///
/// Bilingual (Korean/English) views of the public roadmap and trust center,
/// catalog validation, and an explorer for the demonstration API.
#[derive(Parser, Debug)]
#[command(name = "aiact", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the roadmap, filtered and grouped by quarter.
    Roadmap(RoadmapArgs),

    /// Show the trust-center overview and activity feeds.
    Trust(TrustArgs),

    /// Validate or print roadmap catalogs.
    Catalog(CatalogArgs),

    /// List or call the demonstration API endpoints.
    Explore(ExploreArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Roadmap(args) => run_roadmap(&args),
        Commands::Trust(args) => run_trust(&args),
        Commands::Catalog(args) => run_catalog(&args),
        Commands::Explore(args) => run_explore(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
