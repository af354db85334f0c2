//! # Status Summary
//!
//! Counts shown above the roadmap: total, launched, in progress, planned.
//! "Closed" entries (and unrecognized statuses) count toward `total` but have
//! no dedicated field, so the three status fields need not add up to
//! `total`.

use serde::Serialize;

use aiact_core::RoadmapStatus;

use crate::entry::RoadmapEntry;

/// Status counts over a (filtered) sequence of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapSummary {
    pub total: usize,
    pub launched: usize,
    pub in_progress: usize,
    pub planned: usize,
}

impl RoadmapSummary {
    /// Launched share of `total` as a whole percentage, rounded half up.
    /// Zero for an empty view.
    pub fn completion_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.launched as f64 / self.total as f64) * 100.0).round() as u8
    }
}

/// Count `filtered` by status.
pub fn summarize<'a, I>(filtered: I) -> RoadmapSummary
where
    I: IntoIterator<Item = &'a RoadmapEntry>,
{
    filtered
        .into_iter()
        .fold(RoadmapSummary::default(), |mut acc, entry| {
            acc.total += 1;
            match entry.status {
                RoadmapStatus::Launched => acc.launched += 1,
                RoadmapStatus::InProgress => acc.in_progress += 1,
                RoadmapStatus::Planned => acc.planned += 1,
                RoadmapStatus::Closed | RoadmapStatus::Other(_) => {}
            }
            acc
        })
}

/// Roadmap completion percentage for `summary`.
pub fn progress(summary: &RoadmapSummary) -> u8 {
    summary.completion_percent()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{filter_items, Catalog, FilterSelection};

    #[test]
    fn builtin_summary() {
        let catalog = Catalog::builtin().unwrap();
        let s = summarize(&catalog);
        assert_eq!(
            s,
            RoadmapSummary {
                total: 3,
                launched: 0,
                in_progress: 1,
                planned: 2
            }
        );
        assert_eq!(progress(&s), 0);
    }

    #[test]
    fn planned_filter_summary() {
        let catalog = Catalog::builtin().unwrap();
        let filtered = filter_items(&catalog, &FilterSelection::parse("all", "", "", "Planned"));
        let s = summarize(filtered.iter().copied());
        assert_eq!(s.total, 2);
        assert_eq!(s.planned, 2);
        assert_eq!(s.launched + s.in_progress, 0);
    }

    #[test]
    fn closed_counts_only_toward_total() {
        let catalog = Catalog::builtin().unwrap();
        let mut entries = catalog.entries().to_vec();
        entries[0].status = RoadmapStatus::Closed;
        entries[1].status = RoadmapStatus::parse("Blocked");
        let s = summarize(&entries);
        assert_eq!(s.total, 3);
        assert_eq!(s.launched + s.in_progress + s.planned, 1);
    }

    #[test]
    fn completion_rounds_half_up() {
        let pct = |launched, total| {
            RoadmapSummary {
                total,
                launched,
                ..Default::default()
            }
            .completion_percent()
        };
        assert_eq!(pct(0, 0), 0);
        assert_eq!(pct(1, 3), 33);
        assert_eq!(pct(2, 3), 67);
        assert_eq!(pct(1, 8), 13);
        assert_eq!(pct(4, 4), 100);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(RoadmapSummary::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"total": 0, "launched": 0, "inProgress": 0, "planned": 0})
        );
    }
}
