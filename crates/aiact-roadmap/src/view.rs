//! # Roadmap View-Model
//!
//! Bundles the three engine outputs for one selection so a front end can
//! render the page from a single value.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::entry::RoadmapEntry;
use crate::filter::{filter_items, FilterSelection};
use crate::group::{group_by_quarter, QuarterGroups};
use crate::summary::{summarize, RoadmapSummary};

/// Filtered, summarized and grouped roadmap for one selection.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapView<'a> {
    pub selection: FilterSelection,
    pub summary: RoadmapSummary,
    pub quarters: QuarterGroups<'a>,
    #[serde(skip)]
    pub items: Vec<&'a RoadmapEntry>,
}

impl<'a> RoadmapView<'a> {
    /// Derive the view of `catalog` under `selection`.
    pub fn build(catalog: &'a Catalog, selection: FilterSelection) -> Self {
        let items = filter_items(catalog, &selection);
        let summary = summarize(items.iter().copied());
        let quarters = group_by_quarter(items.iter().copied());
        Self {
            selection,
            summary,
            quarters,
            items,
        }
    }
}
