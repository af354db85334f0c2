//! # Roadmap Entry

use serde::{Deserialize, Serialize};

use aiact_core::{BilingualText, ItemType, Quarter, RoadmapStatus, Timestamp};

/// One item on the public roadmap.
///
/// Serialized with the camelCase field names the roadmap API has always
/// exposed (`githubLink`, `createdAt`, `updatedAt`); the item type is
/// emitted as `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapEntry {
    /// Unique identifier, e.g. `roadmap-001`.
    pub id: String,
    pub title: BilingualText,
    pub description: BilingualText,
    /// Free-form workstream tag, e.g. "Model Quality".
    pub workstream: String,
    pub quarter: Quarter,
    pub status: RoadmapStatus,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "id": "roadmap-009",
            "title": {"ko": "제목", "en": "Title"},
            "description": {"ko": "설명", "en": "Description"},
            "workstream": "Reasoning",
            "quarter": "Q2-2026",
            "status": "Launched",
            "type": "Bug",
            "labels": ["a", "b"],
            "createdAt": "2025-04-01T00:00:00Z",
            "updatedAt": "2025-05-01T00:00:00Z"
        })
    }

    #[test]
    fn deserializes_wire_shape() {
        let entry: RoadmapEntry = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(entry.quarter, Quarter::Q2_2026);
        assert_eq!(entry.status, RoadmapStatus::Launched);
        assert_eq!(entry.item_type, ItemType::Bug);
        assert_eq!(entry.labels, ["a", "b"]);
        assert!(entry.github_link.is_none());
    }

    #[test]
    fn serializes_type_and_camel_case() {
        let entry: RoadmapEntry = serde_json::from_value(sample_json()).unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "Bug");
        assert_eq!(json["createdAt"], "2025-04-01T00:00:00Z");
        assert!(json.get("githubLink").is_none());
        assert!(json.get("item_type").is_none());
    }

    #[test]
    fn unknown_taxonomy_values_survive() {
        let mut raw = sample_json();
        raw["quarter"] = "Q9-2099".into();
        raw["status"] = "Blocked".into();
        let entry: RoadmapEntry = serde_json::from_value(raw).unwrap();
        assert!(!entry.quarter.is_known());
        assert!(!entry.status.is_known());
        assert_eq!(serde_json::to_value(&entry).unwrap()["quarter"], "Q9-2099");
    }

    #[test]
    fn github_link_round_trips_when_present() {
        let mut raw = sample_json();
        raw["githubLink"] = "https://github.com/example/repo/issues/1".into();
        let entry: RoadmapEntry = serde_json::from_value(raw).unwrap();
        assert_eq!(
            entry.github_link.as_deref(),
            Some("https://github.com/example/repo/issues/1")
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["githubLink"], "https://github.com/example/repo/issues/1");
    }
}
