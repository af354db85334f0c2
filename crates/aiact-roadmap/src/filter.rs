//! # Filter Selection
//!
//! A [`FilterSelection`] is the caller's current tab and dropdown choices.
//! It is owned by the caller and passed in on every call; the engine keeps
//! no state between calls.
//!
//! An entry passes iff every criterion holds:
//!
//! 1. the quarter tab is [`QuarterTab::All`] or equals the entry's quarter;
//! 2. the type criterion is unset or equals the entry's type;
//! 3. the workstream criterion is unset or equals the entry's workstream;
//! 4. the status criterion is unset or equals the entry's status.
//!
//! Comparison is plain equality of the wire labels, so a criterion holding
//! an unrecognized value matches nothing except an entry carrying the very
//! same unrecognized value.

use serde::{Serialize, Serializer};

use aiact_core::{ItemType, Language, Quarter, RoadmapStatus};

use crate::entry::RoadmapEntry;

/// Quarter tab on the roadmap page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum QuarterTab {
    /// "all": no quarter restriction.
    #[default]
    All,
    /// A single quarter.
    Only(Quarter),
}

impl QuarterTab {
    /// Parse a tab id: `"all"` or a quarter label.
    pub fn parse(s: &str) -> Self {
        match s {
            "all" => Self::All,
            other => Self::Only(Quarter::parse(other)),
        }
    }

    /// Tab id on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(q) => q.as_str(),
        }
    }

    /// Tab caption.
    pub fn title(&self, lang: Language) -> &str {
        match self {
            Self::All => lang.pick("전체 보기", "All"),
            Self::Only(q) => q.title(lang),
        }
    }

    /// The six tabs shown on the roadmap page, "all" first.
    pub fn tabs() -> Vec<QuarterTab> {
        std::iter::once(Self::All)
            .chain(Quarter::all().iter().cloned().map(Self::Only))
            .collect()
    }

    fn admits(&self, quarter: &Quarter) -> bool {
        match self {
            Self::All => true,
            Self::Only(q) => q == quarter,
        }
    }
}

impl Serialize for QuarterTab {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The caller's filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub quarter_tab: QuarterTab,
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
    pub workstream: Option<String>,
    pub status: Option<RoadmapStatus>,
}

impl FilterSelection {
    /// Build a selection from raw UI values.
    ///
    /// `"all"` selects every quarter; an empty string leaves the other
    /// criteria unset.
    pub fn parse(quarter_tab: &str, item_type: &str, workstream: &str, status: &str) -> Self {
        fn non_empty(s: &str) -> Option<&str> {
            Some(s).filter(|s| !s.is_empty())
        }
        Self {
            quarter_tab: QuarterTab::parse(quarter_tab),
            item_type: non_empty(item_type).map(ItemType::parse),
            workstream: non_empty(workstream).map(str::to_string),
            status: non_empty(status).map(RoadmapStatus::parse),
        }
    }

    /// Restrict to one quarter tab.
    pub fn with_quarter_tab(mut self, tab: QuarterTab) -> Self {
        self.quarter_tab = tab;
        self
    }

    /// Restrict to one item type.
    pub fn with_item_type(mut self, item_type: ItemType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    /// Restrict to one workstream.
    pub fn with_workstream(mut self, workstream: impl Into<String>) -> Self {
        self.workstream = Some(workstream.into());
        self
    }

    /// Restrict to one status.
    pub fn with_status(mut self, status: RoadmapStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no criterion is set.
    pub fn is_unrestricted(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `entry` passes all four criteria.
    pub fn matches(&self, entry: &RoadmapEntry) -> bool {
        self.quarter_tab.admits(&entry.quarter)
            && self.item_type.as_ref().map_or(true, |t| *t == entry.item_type)
            && self.workstream.as_ref().map_or(true, |w| *w == entry.workstream)
            && self.status.as_ref().map_or(true, |s| *s == entry.status)
    }
}

/// Order-preserving sub-sequence of `entries` that passes `selection`.
///
/// Accepts a [`Catalog`](crate::Catalog), a slice of entries, or an
/// iterator of borrowed entries (for re-filtering a previous result).
pub fn filter_items<'a, I>(entries: I, selection: &FilterSelection) -> Vec<&'a RoadmapEntry>
where
    I: IntoIterator<Item = &'a RoadmapEntry>,
{
    entries
        .into_iter()
        .filter(|entry| selection.matches(entry))
        .collect()
}
