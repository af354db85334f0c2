//! # Filter/Group Engine Properties
//!
//! Property tests over arbitrary catalogs and selections, plus the
//! three-entry "Planned" scenario.

use aiact_core::{BilingualText, ItemType, Quarter, RoadmapStatus, Timestamp};
use aiact_roadmap::{
    filter_items, group_by_quarter, summarize, FilterSelection, QuarterTab, RoadmapEntry,
    RoadmapSummary,
};
use proptest::prelude::*;

// -- Strategies ---------------------------------------------------------------

fn quarter_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Q3-2025".to_string()),
        Just("Q4-2025".to_string()),
        Just("Q1-2026".to_string()),
        Just("Q2-2026".to_string()),
        Just("Future".to_string()),
        Just("Q9-2099".to_string()),
    ]
}

fn status_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Planned".to_string()),
        Just("In Progress".to_string()),
        Just("Launched".to_string()),
        Just("Closed".to_string()),
        Just("Blocked".to_string()),
    ]
}

fn type_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Feature".to_string()),
        Just("Bug".to_string()),
        Just("Enhancement".to_string()),
    ]
}

fn workstream_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Model Quality".to_string()),
        Just("Reasoning".to_string()),
        Just("Extensibility".to_string()),
    ]
}

fn entry(index: usize) -> impl Strategy<Value = RoadmapEntry> {
    (quarter_label(), status_label(), type_label(), workstream_label()).prop_map(
        move |(quarter, status, item_type, workstream)| RoadmapEntry {
            id: format!("roadmap-{index:03}"),
            title: BilingualText::new(format!("항목 {index}"), format!("Item {index}")),
            description: BilingualText::new("설명", "Description"),
            workstream,
            quarter: Quarter::from(quarter),
            status: RoadmapStatus::from(status),
            item_type: ItemType::from(item_type),
            labels: vec![],
            github_link: None,
            created_at: Timestamp::parse("2025-01-01T00:00:00Z").unwrap(),
            updated_at: Timestamp::parse("2025-06-01T00:00:00Z").unwrap(),
        },
    )
}

fn catalog() -> impl Strategy<Value = Vec<RoadmapEntry>> {
    (0usize..12).prop_flat_map(|n| (0..n).map(entry).collect::<Vec<_>>())
}

fn optional(s: impl Strategy<Value = String>) -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), s]
}

fn selection() -> impl Strategy<Value = FilterSelection> {
    (
        prop_oneof![Just("all".to_string()), quarter_label()],
        optional(type_label()),
        optional(workstream_label()),
        optional(status_label()),
    )
        .prop_map(|(tab, t, w, s)| FilterSelection::parse(&tab, &t, &w, &s))
}

fn is_subsequence(sub: &[&RoadmapEntry], full: &[RoadmapEntry]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| std::ptr::eq(f, *s)))
}

// -- Properties ---------------------------------------------------------------

proptest! {
    #[test]
    fn filtered_is_ordered_subsequence(c in catalog(), s in selection()) {
        let filtered = filter_items(&c, &s);
        prop_assert!(is_subsequence(&filtered, &c));
        prop_assert!(filtered.iter().all(|e| s.matches(e)));
    }

    #[test]
    fn unrestricted_selection_is_identity(c in catalog()) {
        let filtered = filter_items(&c, &FilterSelection::default());
        prop_assert_eq!(filtered.len(), c.len());
        prop_assert!(filtered.iter().zip(&c).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn grouping_has_five_keys_and_covers_known_quarters(c in catalog(), s in selection()) {
        let filtered = filter_items(&c, &s);
        let groups = group_by_quarter(filtered.iter().copied());
        prop_assert_eq!(groups.buckets().len(), 5);

        let known: Vec<&RoadmapEntry> = filtered
            .iter()
            .copied()
            .filter(|e| e.quarter.is_known())
            .collect();
        prop_assert_eq!(groups.total(), known.len());
        for bucket in groups.buckets() {
            prop_assert!(bucket.items.iter().all(|e| e.quarter == bucket.quarter));
            prop_assert!(is_subsequence(&bucket.items, &c));
        }
    }

    #[test]
    fn summary_total_matches_length(c in catalog(), s in selection()) {
        let filtered = filter_items(&c, &s);
        let summary = summarize(filtered.iter().copied());
        prop_assert_eq!(summary.total, filtered.len());
        prop_assert!(summary.launched + summary.in_progress + summary.planned <= summary.total);
    }

    #[test]
    fn refiltering_is_idempotent(c in catalog(), s in selection()) {
        let once = filter_items(&c, &s);
        let twice = filter_items(once.iter().copied(), &s);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn single_quarter_tab_yields_one_populated_bucket(c in catalog(), q in quarter_label()) {
        let s = FilterSelection::default().with_quarter_tab(QuarterTab::parse(&q));
        let groups = group_by_quarter(filter_items(&c, &s));
        let populated = groups.non_empty().count();
        prop_assert!(populated <= 1);
        if let Some(bucket) = groups.non_empty().next() {
            prop_assert_eq!(bucket.quarter.as_str(), q.as_str());
        };
    }
}

// -- Scenario -----------------------------------------------------------------

#[test]
fn planned_status_scenario() {
    let mk = |id: &str, quarter: &str, status: &str| RoadmapEntry {
        id: id.to_string(),
        title: BilingualText::new("제목", "Title"),
        description: BilingualText::new("설명", "Description"),
        workstream: "Model Quality".to_string(),
        quarter: Quarter::parse(quarter),
        status: RoadmapStatus::parse(status),
        item_type: ItemType::Feature,
        labels: vec![],
        github_link: None,
        created_at: Timestamp::parse("2025-01-01T00:00:00Z").unwrap(),
        updated_at: Timestamp::parse("2025-01-02T00:00:00Z").unwrap(),
    };
    let c = vec![
        mk("a", "Q3-2025", "In Progress"),
        mk("b", "Q4-2025", "Planned"),
        mk("c", "Q1-2026", "Planned"),
    ];

    let filtered = filter_items(&c, &FilterSelection::parse("all", "", "", "Planned"));
    let quarters: Vec<&str> = filtered.iter().map(|e| e.quarter.as_str()).collect();
    assert_eq!(quarters, ["Q4-2025", "Q1-2026"]);

    assert_eq!(
        summarize(filtered.iter().copied()),
        RoadmapSummary {
            total: 2,
            launched: 0,
            in_progress: 0,
            planned: 2
        }
    );
}

#[test]
fn empty_catalog_is_well_defined() {
    let c: Vec<RoadmapEntry> = Vec::new();
    let filtered = filter_items(&c, &FilterSelection::parse("Future", "Bug", "x", "Closed"));
    assert!(filtered.is_empty());
    assert_eq!(group_by_quarter(filtered.iter().copied()).buckets().len(), 5);
    assert_eq!(summarize(filtered.iter().copied()), RoadmapSummary::default());
}
