//! # aiact-core: Foundational Types for the Compliance Platform
//!
//! Shared vocabulary for every other crate in the workspace. Defines the
//! bilingual text model, the fixed roadmap taxonomies, and UTC timestamps
//! with Korean/English rendering. Depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit bilingual access.** Text that exists in Korean and English
//!    is a [`BilingualText`] with two named fields. Display code picks a half
//!    with [`localize`], never by indexing on a runtime key.
//!
//! 2. **Closed enumerations that tolerate foreign data.** [`Quarter`],
//!    [`RoadmapStatus`] and [`ItemType`] name their fixed members as variants
//!    and keep any other string verbatim in an `Other` variant. Unknown values
//!    round-trip through JSON and compare unequal to every known member.
//!
//! 3. **UTC-only timestamps.** [`Timestamp`] parses RFC 3339, normalizes to
//!    UTC, and renders the two locale forms the UI shows.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `aiact-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod language;
pub mod taxonomy;
pub mod temporal;

pub use error::CoreError;
pub use language::{localize, BilingualText, Language};
pub use taxonomy::{ItemType, Quarter, RoadmapStatus};
pub use temporal::{format_timestamp, Timestamp};
