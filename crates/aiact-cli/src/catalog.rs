//! # Catalog CLI: Validate roadmap catalog documents.
//!
//! ```bash
//! aiact catalog validate roadmap.json
//! aiact catalog show            # print the built-in catalog
//! ```
//!
//! Validation fails (exit 1) on a parse error, a duplicate id, or an entry
//! updated before it was created. Unrecognized quarter, status, type or
//! workstream values are allowed but reported as warnings, since such
//! entries never match the corresponding filter.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use aiact_roadmap::Catalog;

/// Catalog subcommand arguments.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

/// Available catalog subcommands.
#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Load a catalog document and report problems.
    Validate {
        /// Path to the JSON catalog.
        path: PathBuf,
    },

    /// Print the built-in catalog as JSON.
    Show,
}

/// Execute the catalog subcommand.
pub fn run_catalog(args: &CatalogArgs) -> Result<u8> {
    match &args.command {
        CatalogCommand::Validate { path } => run_validate(path),
        CatalogCommand::Show => {
            let catalog = crate::load_catalog(None)?;
            println!("{}", catalog.to_json_pretty()?);
            Ok(0)
        }
    }
}

fn run_validate(path: &Path) -> Result<u8> {
    let catalog = match Catalog::from_path(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            println!("FAIL: {}", path.display());
            println!("  {e}");
            return Ok(1);
        }
    };

    let warnings = catalog_warnings(&catalog);
    println!(
        "OK: {} ({} entries, {} workstreams)",
        path.display(),
        catalog.len(),
        catalog.workstreams().len()
    );
    for w in &warnings {
        println!("  warning: {w}");
    }
    Ok(0)
}

/// Values in `catalog` that no filter option can select.
pub fn catalog_warnings(catalog: &Catalog) -> Vec<String> {
    let mut warnings = Vec::new();
    for entry in catalog {
        if !entry.quarter.is_known() {
            warnings.push(format!("{}: unrecognized quarter '{}'", entry.id, entry.quarter));
        }
        if !entry.status.is_known() {
            warnings.push(format!("{}: unrecognized status '{}'", entry.id, entry.status));
        }
        if !entry.item_type.is_known() {
            warnings.push(format!("{}: unrecognized type '{}'", entry.id, entry.item_type));
        }
        if !catalog.workstreams().is_empty()
            && !catalog.workstreams().contains(&entry.workstream)
        {
            warnings.push(format!(
                "{}: workstream '{}' is not declared",
                entry.id, entry.workstream
            ));
        }
    }
    warnings
}
