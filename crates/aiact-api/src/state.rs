//! # Application State
//!
//! The catalog is loaded once at startup and shared read-only behind an
//! `Arc`; handlers never lock or mutate anything.

use std::path::PathBuf;
use std::sync::Arc;

use aiact_roadmap::{Catalog, CatalogError};

/// Server configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen port (`AIACT_PORT`, default 8080).
    pub port: u16,
    /// Catalog document to serve (`AIACT_CATALOG`). `None` serves the
    /// built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// Mount `/metrics` and the metrics middleware (`AIACT_METRICS_ENABLED`).
    pub metrics_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            catalog_path: None,
            metrics_enabled: true,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// An unparsable port falls back to the default. Metrics stay enabled
    /// unless the flag is exactly `false` (case-insensitive).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            port: lookup("AIACT_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            catalog_path: lookup("AIACT_CATALOG")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            metrics_enabled: lookup("AIACT_METRICS_ENABLED")
                .map(|v| v.to_lowercase() != "false")
                .unwrap_or(defaults.metrics_enabled),
        }
    }
}

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// State over the built-in catalog with default configuration.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::with_catalog(AppConfig::default(), Catalog::builtin()?))
    }

    /// State for `config`, loading the catalog it names.
    pub fn from_config(config: AppConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin()?,
        };
        Ok(Self::with_catalog(config, catalog))
    }

    pub fn with_catalog(config: AppConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 8080);
        assert!(config.metrics_enabled);
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("AIACT_PORT", "9000"),
            ("AIACT_CATALOG", "/etc/aiact/roadmap.json"),
            ("AIACT_METRICS_ENABLED", "FALSE"),
        ]));
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/aiact/roadmap.json"))
        );
        assert!(!config.metrics_enabled);
    }

    #[test]
    fn bad_port_falls_back() {
        let config = AppConfig::from_lookup(lookup(&[("AIACT_PORT", "http")]));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn metrics_flag_only_disabled_by_false() {
        let config = AppConfig::from_lookup(lookup(&[("AIACT_METRICS_ENABLED", "0")]));
        assert!(config.metrics_enabled);
    }

    #[test]
    fn from_config_reports_missing_catalog() {
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/roadmap.json")),
            ..AppConfig::default()
        };
        assert!(matches!(
            AppState::from_config(config),
            Err(CatalogError::Io { .. })
        ));
    }

    #[test]
    fn from_config_loads_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roadmap.json");
        std::fs::write(&path, r#"{"workstreams": ["Reasoning"], "items": []}"#).unwrap();

        let config = AppConfig::from_lookup(lookup(&[("AIACT_CATALOG", path.to_str().unwrap())]));
        let state = AppState::from_config(config).unwrap();
        assert!(state.catalog.is_empty());
        assert_eq!(state.catalog.workstreams(), ["Reasoning"]);
    }

    #[test]
    fn builtin_state_has_catalog() {
        let state = AppState::builtin().unwrap();
        assert_eq!(state.catalog.len(), 3);
    }
}
