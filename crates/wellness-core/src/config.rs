//! Runtime configuration.

use serde::{Deserialize, Serialize};
use wellness_extract::ExtractionConfig;

/// Application version, from Cargo metadata.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MediaWiki action API used for condition enrichment.
pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Seconds before an enrichment request is abandoned.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "wellness_core=info";

pub const ENV_API_URL: &str = "WELLNESS_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "WELLNESS_TIMEOUT_SECS";
pub const ENV_DB_PATH: &str = "WELLNESS_DB_PATH";
pub const ENV_EXTRACT_CAP: &str = "WELLNESS_EXTRACT_CAP";

/// Settings shared by the store, the enrichment client and the extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// `None` keeps the store in memory
    pub database_path: Option<String>,
    pub extraction: ExtractionConfig,
}

impl Default for WellnessConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("wellness-core/{}", APP_VERSION),
            database_path: None,
            extraction: ExtractionConfig::default(),
        }
    }
}

impl WellnessConfig {
    /// Defaults overridden by `WELLNESS_*` environment variables.
    ///
    /// Missing or unparsable values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, test map, ...).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(secs) = parse_positive(lookup(ENV_TIMEOUT_SECS)) {
            config.request_timeout_secs = secs as u64;
        }
        if let Some(path) = lookup(ENV_DB_PATH).filter(|v| !v.trim().is_empty()) {
            config.database_path = Some(path);
        }
        if let Some(cap) = parse_positive(lookup(ENV_EXTRACT_CAP)) {
            config.extraction = config.extraction.with_cap(cap);
        }

        config
    }
}

fn parse_positive(raw: Option<String>) -> Option<usize> {
    match raw?.trim().parse::<usize>() {
        Ok(0) => None,
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring unparsable numeric setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = WellnessConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.database_path.is_none());
        assert_eq!(config.extraction.cap, 5);
        assert!(config.user_agent.starts_with("wellness-core/"));
    }

    #[test]
    fn test_overrides() {
        let config = WellnessConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "http://localhost:8080/w/api.php"),
            (ENV_TIMEOUT_SECS, "3"),
            (ENV_DB_PATH, "/tmp/wellness.db"),
            (ENV_EXTRACT_CAP, "6"),
        ]));
        assert_eq!(config.api_base_url, "http://localhost:8080/w/api.php");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.database_path.as_deref(), Some("/tmp/wellness.db"));
        assert_eq!(config.extraction.cap, 6);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = WellnessConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "   "),
            (ENV_TIMEOUT_SECS, "soon"),
            (ENV_EXTRACT_CAP, "0"),
        ]));
        assert_eq!(config, WellnessConfig::default());
    }
}
