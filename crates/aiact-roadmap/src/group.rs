//! # Quarter Grouping
//!
//! [`group_by_quarter`] buckets a filtered sequence by delivery quarter.
//! There is always exactly one bucket per known quarter, in roadmap order,
//! even when the bucket is empty. Entries keep their relative order inside
//! a bucket. Entries whose quarter is unrecognized land in no bucket.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use aiact_core::Quarter;

use crate::entry::RoadmapEntry;

/// Entries of one quarter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterBucket<'a> {
    pub quarter: Quarter,
    pub items: Vec<&'a RoadmapEntry>,
}

impl QuarterBucket<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// The five quarter buckets, in roadmap order.
///
/// Serializes as a JSON object keyed by quarter label, keys in roadmap
/// order: `{"Q3-2025": [...], ..., "Future": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterGroups<'a> {
    buckets: Vec<QuarterBucket<'a>>,
}

impl<'a> QuarterGroups<'a> {
    /// All buckets, including empty ones.
    pub fn buckets(&self) -> &[QuarterBucket<'a>] {
        &self.buckets
    }

    /// Buckets with at least one entry.
    pub fn non_empty(&self) -> impl Iterator<Item = &QuarterBucket<'a>> {
        self.buckets.iter().filter(|b| !b.is_empty())
    }

    /// Entries for `quarter`. `None` only for an unrecognized quarter.
    pub fn get(&self, quarter: &Quarter) -> Option<&[&'a RoadmapEntry]> {
        self.buckets
            .iter()
            .find(|b| b.quarter == *quarter)
            .map(|b| b.items.as_slice())
    }

    /// Number of entries across all buckets.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(QuarterBucket::len).sum()
    }
}

impl Serialize for QuarterGroups<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for bucket in &self.buckets {
            map.serialize_entry(bucket.quarter.as_str(), &bucket.items)?;
        }
        map.end()
    }
}

/// Bucket `filtered` by quarter.
pub fn group_by_quarter<'a, I>(filtered: I) -> QuarterGroups<'a>
where
    I: IntoIterator<Item = &'a RoadmapEntry>,
{
    let mut buckets: Vec<QuarterBucket<'a>> = Quarter::all()
        .iter()
        .map(|q| QuarterBucket {
            quarter: q.clone(),
            items: Vec::new(),
        })
        .collect();

    for entry in filtered {
        match buckets.iter_mut().find(|b| b.quarter == entry.quarter) {
            Some(bucket) => bucket.items.push(entry),
            None => tracing::trace!(
                id = %entry.id,
                quarter = %entry.quarter,
                "entry has unrecognized quarter; left out of grouping"
            ),
        }
    }

    QuarterGroups { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{filter_items, Catalog, FilterSelection};

    #[test]
    fn always_five_buckets_in_order() {
        let groups = group_by_quarter(std::iter::empty::<&RoadmapEntry>());
        let keys: Vec<&str> = groups.buckets().iter().map(|b| b.quarter.as_str()).collect();
        assert_eq!(keys, ["Q3-2025", "Q4-2025", "Q1-2026", "Q2-2026", "Future"]);
        assert!(groups.buckets().iter().all(QuarterBucket::is_empty));
        assert_eq!(groups.total(), 0);
    }

    #[test]
    fn builtin_catalog_grouping() {
        let catalog = Catalog::builtin().unwrap();
        let groups = group_by_quarter(&catalog);
        assert_eq!(groups.get(&Quarter::Q3_2025).unwrap().len(), 1);
        assert_eq!(groups.get(&Quarter::Q4_2025).unwrap().len(), 1);
        assert_eq!(groups.get(&Quarter::Q1_2026).unwrap().len(), 1);
        assert!(groups.get(&Quarter::Q2_2026).unwrap().is_empty());
        assert!(groups.get(&Quarter::Future).unwrap().is_empty());
        assert_eq!(groups.non_empty().count(), 3);
    }

    #[test]
    fn unrecognized_quarter_dropped() {
        let catalog = Catalog::builtin().unwrap();
        let mut entries = catalog.entries().to_vec();
        entries[0].quarter = Quarter::parse("Someday");
        let groups = group_by_quarter(&entries);
        assert_eq!(groups.total(), 2);
        assert!(groups.get(&Quarter::Q3_2025).unwrap().is_empty());
        assert!(groups.get(&Quarter::parse("Someday")).is_none());
    }

    #[test]
    fn grouping_a_filtered_view() {
        let catalog = Catalog::builtin().unwrap();
        let filtered = filter_items(&catalog, &FilterSelection::parse("all", "", "", "Planned"));
        let groups = group_by_quarter(filtered.iter().copied());
        assert!(groups.get(&Quarter::Q3_2025).unwrap().is_empty());
        assert_eq!(groups.get(&Quarter::Q4_2025).unwrap()[0].id, "roadmap-002");
        assert_eq!(groups.get(&Quarter::Q1_2026).unwrap()[0].id, "roadmap-003");
    }

    #[test]
    fn serializes_as_ordered_object() {
        let catalog = Catalog::builtin().unwrap();
        let json = serde_json::to_string(&group_by_quarter(&catalog)).unwrap();
        let keys = [
            "\"Q3-2025\"",
            "\"Q4-2025\"",
            "\"Q1-2026\"",
            "\"Q2-2026\"",
            "\"Future\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Future"], serde_json::json!([]));
        assert_eq!(value["Q3-2025"][0]["id"], "roadmap-001");
    }
}
