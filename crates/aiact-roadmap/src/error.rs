//! # Catalog Errors

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate a catalog or feed document.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The document is not valid JSON or does not match the entry shape.
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("cannot read catalog file {path}: {source}")]
    Io {
        /// File that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Two entries share an id.
    #[error("duplicate roadmap entry id {0:?}")]
    DuplicateId(String),

    /// An entry was updated before it was created.
    #[error("entry {id:?} has updatedAt {updated_at} earlier than createdAt {created_at}")]
    TimestampOrder {
        /// Offending entry.
        id: String,
        /// Creation time as authored.
        created_at: String,
        /// Update time as authored.
        updated_at: String,
    },
}
