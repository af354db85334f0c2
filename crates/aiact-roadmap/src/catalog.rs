//! # Roadmap Catalog
//!
//! The immutable source list the roadmap views are derived from.
//!
//! A catalog is constructed once, either from the document compiled into
//! this crate ([`Catalog::builtin`]) or from an operator-supplied JSON file
//! ([`Catalog::from_path`]), and then shared read-only for the life of the
//! process. Construction validates the invariants the views rely on:
//!
//! - entry ids are unique;
//! - `updatedAt >= createdAt` for every entry.
//!
//! Unrecognized quarter, status or type strings are accepted as-is. They are
//! not errors; such entries simply never match a known filter value and an
//! unrecognized quarter lands in no bucket.
//!
//! ## Document Shape
//!
//! ```json
//! { "workstreams": ["Model Quality", "..."], "items": [ { "id": "...", ... } ] }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use aiact_core::{Quarter, RoadmapStatus};

use crate::entry::RoadmapEntry;
use crate::error::CatalogError;
use crate::filter::{filter_items, FilterSelection, QuarterTab};

const BUILTIN_DOCUMENT: &str = include_str!("../data/roadmap.json");

#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    workstreams: Vec<String>,
    items: Vec<RoadmapEntry>,
}

/// Validated, ordered snapshot of roadmap entries.
///
/// Entry order is authoring order and is preserved by every derived view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<RoadmapEntry>,
    workstreams: Vec<String>,
}

impl Catalog {
    /// Build a catalog from entries and the declared workstream list.
    ///
    /// # Errors
    ///
    /// [`CatalogError::DuplicateId`] or [`CatalogError::TimestampOrder`] if
    /// an entry breaks a catalog invariant.
    pub fn new(entries: Vec<RoadmapEntry>, workstreams: Vec<String>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
            if entry.updated_at < entry.created_at {
                return Err(CatalogError::TimestampOrder {
                    id: entry.id.clone(),
                    created_at: entry.created_at.to_string(),
                    updated_at: entry.updated_at.to_string(),
                });
            }
        }
        Ok(Self {
            entries,
            workstreams,
        })
    }

    /// The catalog published with the platform.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_DOCUMENT)
    }

    /// Parse and validate a catalog document.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(document)?;
        let catalog = Self::new(doc.items, doc.workstreams)?;
        tracing::debug!(
            entries = catalog.len(),
            workstreams = catalog.workstreams.len(),
            "roadmap catalog loaded"
        );
        Ok(catalog)
    }

    /// Read, parse and validate a catalog file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let document = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&document)
    }

    /// All entries in authoring order.
    pub fn entries(&self) -> &[RoadmapEntry] {
        &self.entries
    }

    /// Declared workstreams, offered as filter choices.
    pub fn workstreams(&self) -> &[String] {
        &self.workstreams
    }

    /// Status filter choices. Fixed; not part of the document.
    pub fn statuses(&self) -> &'static [RoadmapStatus] {
        RoadmapStatus::all()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by id.
    pub fn get(&self, id: &str) -> Option<&RoadmapEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries scheduled for `quarter`, in catalog order.
    pub fn in_quarter(&self, quarter: &Quarter) -> Vec<&RoadmapEntry> {
        let selection = FilterSelection {
            quarter_tab: QuarterTab::Only(quarter.clone()),
            ..FilterSelection::default()
        };
        filter_items(self, &selection)
    }

    /// Serialize back to the document shape.
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        let doc = CatalogDocument {
            workstreams: self.workstreams.clone(),
            items: self.entries.clone(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a RoadmapEntry;
    type IntoIter = std::slice::Iter<'a, RoadmapEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
