//! # Trust Center Feed
//!
//! The trust center shows roadmap completion next to fixed operational
//! figures: per-service health, the recent deployment log and the latest
//! commits. None of it is
//! measured; the feed is a static document compiled into the crate, the
//! same way the roadmap catalog is.

use serde::{Deserialize, Serialize};

use aiact_core::{BilingualText, Language, Timestamp};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::summary::{summarize, RoadmapSummary};

const TRUST_DOCUMENT: &str = include_str!("../data/trust.json");

/// Platform uptime shown in the overview.
pub const PLATFORM_UPTIME: &str = "99.97%";

/// Compliance score shown in the overview. Matches the compliance-check stub.
pub const COMPLIANCE_SCORE: u8 = 72;

/// Health of one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceHealth {
    Operational,
    Degraded,
    Outage,
    #[serde(other)]
    Unknown,
}

impl ServiceHealth {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Operational => "🟢",
            Self::Degraded => "🟡",
            Self::Outage => "🔴",
            Self::Unknown => "⚪",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            Self::Operational => lang.pick("정상 운영", "Operational"),
            Self::Degraded => lang.pick("성능 저하", "Degraded"),
            Self::Outage => lang.pick("장애 발생", "Outage"),
            Self::Unknown => lang.pick("알 수 없음", "Unknown"),
        }
    }
}

/// Outcome of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Success,
    Failed,
    Pending,
    #[serde(other)]
    Unknown,
}

impl DeploymentStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Failed => "❌",
            Self::Pending => "⏳",
            Self::Unknown => "⚪",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub name: BilingualText,
    pub status: ServiceHealth,
    pub uptime: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: String,
    pub title: BilingualText,
    pub status: DeploymentStatus,
    pub timestamp: Timestamp,
    /// Wall-clock duration as displayed, e.g. `2m 34s`.
    pub duration: String,
    /// Target environment, e.g. `production`.
    pub environment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Abbreviated commit hash.
    pub hash: String,
    pub message: BilingualText,
    pub author: String,
    /// Relative age as displayed, e.g. `2시간 전` / `2 hours ago`.
    pub age: BilingualText,
}

/// Static service-health, deployment and commit feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustFeed {
    pub services: Vec<ServiceStatus>,
    pub deployments: Vec<Deployment>,
    #[serde(default)]
    pub commits: Vec<Commit>,
}

impl TrustFeed {
    /// The feed published with the platform.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(TRUST_DOCUMENT)?)
    }
}

/// Headline figures for the trust center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustOverview {
    pub roadmap: RoadmapSummary,
    pub completion_percent: u8,
    pub uptime: &'static str,
    pub compliance_score: u8,
    pub system_status: ServiceHealth,
}

impl TrustOverview {
    /// Overview over the whole catalog, ignoring any filter.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let roadmap = summarize(catalog);
        Self {
            completion_percent: roadmap.completion_percent(),
            roadmap,
            uptime: PLATFORM_UPTIME,
            compliance_score: COMPLIANCE_SCORE,
            system_status: ServiceHealth::Operational,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_feed_loads() {
        let feed = TrustFeed::builtin().unwrap();
        assert_eq!(feed.services.len(), 4);
        assert_eq!(feed.deployments.len(), 4);
        assert!(feed
            .services
            .iter()
            .all(|s| s.status == ServiceHealth::Operational));
        assert_eq!(feed.deployments[3].environment, "staging");
        assert_eq!(feed.commits.len(), 5);
        assert_eq!(feed.commits[0].hash, "3f2a1b9");
    }

    #[test]
    fn commits_are_optional() {
        let feed: TrustFeed =
            serde_json::from_str(r#"{"services": [], "deployments": []}"#).unwrap();
        assert!(feed.commits.is_empty());
    }

    #[test]
    fn deployments_are_newest_first() {
        let feed = TrustFeed::builtin().unwrap();
        assert!(feed
            .deployments
            .windows(2)
            .all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn unknown_health_value_is_tolerated() {
        let status: ServiceHealth = serde_json::from_str("\"maintenance\"").unwrap();
        assert_eq!(status, ServiceHealth::Unknown);
        assert_eq!(status.icon(), "⚪");
        assert_eq!(status.label(Language::Ko), "알 수 없음");
    }

    #[test]
    fn overview_for_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let overview = TrustOverview::for_catalog(&catalog);
        assert_eq!(overview.completion_percent, 0);
        assert_eq!(overview.roadmap.total, 3);
        assert_eq!(overview.compliance_score, 72);
        assert_eq!(overview.uptime, "99.97%");
    }
}
