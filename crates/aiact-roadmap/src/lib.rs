//! # aiact-roadmap: Roadmap Catalog and View Engine
//!
//! The public roadmap is a small, hand-authored catalog of planned work.
//! This crate owns that catalog and the pure functions that derive every
//! roadmap view from it.
//!
//! ## Modules
//!
//! - [`entry`]: [`RoadmapEntry`], one immutable catalog item.
//! - [`catalog`]: [`Catalog`], the validated, ordered snapshot of entries
//!   plus the declared workstreams. Built once, never mutated.
//! - [`filter`]: [`FilterSelection`] and [`filter_items`].
//! - [`group`]: [`group_by_quarter`] into the five fixed quarter buckets.
//! - [`summary`]: [`summarize`] status counts and completion [`progress`].
//! - [`view`]: [`RoadmapView`], the three derivations bundled for display.
//! - [`trust`]: static trust-center feed (service health, deployments, commits).
//!
//! ## Engine Contract
//!
//! `filter_items`, `group_by_quarter` and `summarize` are synchronous, pure,
//! and total: empty catalogs, empty selections and unrecognized
//! quarter/status/type values all produce well-defined results. Derived
//! views borrow from the catalog; nothing here mutates it.

pub mod catalog;
pub mod entry;
pub mod error;
pub mod filter;
pub mod group;
pub mod summary;
pub mod trust;
pub mod view;

pub use catalog::Catalog;
pub use entry::RoadmapEntry;
pub use error::CatalogError;
pub use filter::{filter_items, FilterSelection, QuarterTab};
pub use group::{group_by_quarter, QuarterBucket, QuarterGroups};
pub use summary::{progress, summarize, RoadmapSummary};
pub use view::RoadmapView;
