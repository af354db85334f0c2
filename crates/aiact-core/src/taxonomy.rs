//! # Roadmap Taxonomies
//!
//! The three fixed enumerations a roadmap entry is classified by:
//! delivery [`Quarter`], lifecycle [`RoadmapStatus`], and [`ItemType`].
//!
//! ## Unknown Values
//!
//! Catalog data is authored by hand, so a value outside an enumeration is
//! not an error. It is kept verbatim in the `Other` variant, serializes back
//! to the same string, and never equals a known member. Grouping drops
//! entries whose quarter is `Other`; filtering treats `Other` like any other
//! value (string equality), so it matches only an identical `Other`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Implements string conversion and serde for a taxonomy enum with an
/// `Other(String)` catch-all variant.
macro_rules! open_string_enum {
    ($ty:ident) => {
        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                Self::parse(s)
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                match Self::parse(&s) {
                    Self::Other(_) => Self::Other(s),
                    known => known,
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

// -- Quarter ------------------------------------------------------------------

/// Delivery quarter of a roadmap entry.
///
/// The five known quarters are ordered as they appear on the roadmap page:
/// Q3-2025, Q4-2025, Q1-2026, Q2-2026, Future.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Quarter {
    /// `"Q3-2025"`
    Q3_2025,
    /// `"Q4-2025"`
    Q4_2025,
    /// `"Q1-2026"`
    Q1_2026,
    /// `"Q2-2026"`
    Q2_2026,
    /// `"Future"`: not yet scheduled.
    Future,
    /// Any label outside the fixed enumeration, kept verbatim.
    Other(String),
}

static KNOWN_QUARTERS: [Quarter; 5] = [
    Quarter::Q3_2025,
    Quarter::Q4_2025,
    Quarter::Q1_2026,
    Quarter::Q2_2026,
    Quarter::Future,
];

impl Quarter {
    /// The five known quarters in roadmap order.
    pub fn all() -> &'static [Quarter] {
        &KNOWN_QUARTERS
    }

    /// Parse a quarter label. Never fails; unknown labels become `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "Q3-2025" => Self::Q3_2025,
            "Q4-2025" => Self::Q4_2025,
            "Q1-2026" => Self::Q1_2026,
            "Q2-2026" => Self::Q2_2026,
            "Future" => Self::Future,
            other => Self::Other(other.to_string()),
        }
    }

    /// Parse a label, returning `None` unless it names a known quarter.
    pub fn known(s: &str) -> Option<Self> {
        Some(Self::parse(s)).filter(Self::is_known)
    }

    /// Wire label, e.g. `"Q1-2026"`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Q3_2025 => "Q3-2025",
            Self::Q4_2025 => "Q4-2025",
            Self::Q1_2026 => "Q1-2026",
            Self::Q2_2026 => "Q2-2026",
            Self::Future => "Future",
            Self::Other(label) => label,
        }
    }

    /// Whether this is one of the five fixed quarters.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Heading shown above the quarter's bucket.
    ///
    /// Only "Future" is translated; dated quarters read the same in both
    /// languages.
    pub fn title(&self, lang: crate::Language) -> &str {
        match (self, lang) {
            (Self::Future, crate::Language::Ko) => "미래 계획",
            _ => self.as_str(),
        }
    }
}

open_string_enum!(Quarter);

// -- Status -------------------------------------------------------------------

/// Lifecycle status of a roadmap entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoadmapStatus {
    /// `"Planned"`
    Planned,
    /// `"In Progress"`
    InProgress,
    /// `"Launched"`
    Launched,
    /// `"Closed"`
    Closed,
    /// Any other status, kept verbatim.
    Other(String),
}

static KNOWN_STATUSES: [RoadmapStatus; 4] = [
    RoadmapStatus::Planned,
    RoadmapStatus::InProgress,
    RoadmapStatus::Launched,
    RoadmapStatus::Closed,
];

impl RoadmapStatus {
    /// The four known statuses in filter-dropdown order.
    pub fn all() -> &'static [RoadmapStatus] {
        &KNOWN_STATUSES
    }

    /// Parse a status label. Never fails; unknown labels become `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "Planned" => Self::Planned,
            "In Progress" => Self::InProgress,
            "Launched" => Self::Launched,
            "Closed" => Self::Closed,
            other => Self::Other(other.to_string()),
        }
    }

    /// Wire label, e.g. `"In Progress"`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Planned => "Planned",
            Self::InProgress => "In Progress",
            Self::Launched => "Launched",
            Self::Closed => "Closed",
            Self::Other(label) => label,
        }
    }

    /// Whether this is one of the four fixed statuses.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Display label used in progress summaries.
    pub fn label(&self, lang: crate::Language) -> &str {
        match self {
            Self::Planned => lang.pick("계획됨", "Planned"),
            Self::InProgress => lang.pick("진행 중", "In Progress"),
            Self::Launched => lang.pick("완료", "Launched"),
            Self::Closed => lang.pick("종료", "Closed"),
            Self::Other(label) => label,
        }
    }
}

open_string_enum!(RoadmapStatus);

// -- Item type ----------------------------------------------------------------

/// Kind of work a roadmap entry represents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemType {
    /// `"Feature"`
    Feature,
    /// `"Bug"`
    Bug,
    /// `"Enhancement"`
    Enhancement,
    /// Any other type, kept verbatim.
    Other(String),
}

static KNOWN_ITEM_TYPES: [ItemType; 3] = [ItemType::Feature, ItemType::Bug, ItemType::Enhancement];

impl ItemType {
    /// The three known item types.
    pub fn all() -> &'static [ItemType] {
        &KNOWN_ITEM_TYPES
    }

    /// Parse a type label. Never fails; unknown labels become `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "Feature" => Self::Feature,
            "Bug" => Self::Bug,
            "Enhancement" => Self::Enhancement,
            other => Self::Other(other.to_string()),
        }
    }

    /// Wire label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Feature => "Feature",
            Self::Bug => "Bug",
            Self::Enhancement => "Enhancement",
            Self::Other(label) => label,
        }
    }

    /// Whether this is one of the three fixed types.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    pub fn label(&self, lang: crate::Language) -> &str {
        match self {
            Self::Feature => lang.pick("기능", "Feature"),
            Self::Bug => lang.pick("버그", "Bug"),
            Self::Enhancement => lang.pick("개선", "Enhancement"),
            Self::Other(label) => label,
        }
    }
}

open_string_enum!(ItemType);
