use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_CONFIG: &str = include_str!("../assets/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner_name: String,
    pub tagline: String,
    pub scroll: ScrollConfig,
    pub timings: TimingConfig,
    pub load_more_page_size: usize,
    pub enable_project_search: bool,
    /// When set, the simulated contact delivery fails with this reason.
    pub simulated_delivery_error: Option<String>,
}

/// Pixel thresholds used by the header, nav highlighting and anchor scrolling.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub header_threshold: f64,
    pub scroll_top_threshold: f64,
    pub section_lookahead: f64,
    pub header_offset: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub submit_delay_ms: u32,
    pub submit_reset_ms: u32,
    pub notification_ms: u32,
    pub typing_start_ms: u32,
    pub typing_interval_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Paulo Koye".to_string(),
            tagline: "Software Developer".to_string(),
            scroll: ScrollConfig::default(),
            timings: TimingConfig::default(),
            load_more_page_size: 12,
            enable_project_search: false,
            simulated_delivery_error: None,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold: 100.0,
            scroll_top_threshold: 500.0,
            section_lookahead: 200.0,
            header_offset: 80.0,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            submit_reset_ms: 3000,
            notification_ms: 5000,
            typing_start_ms: 1000,
            typing_interval_ms: 100,
        }
    }
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load() -> Self {
        match Self::parse(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}; falling back to defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::parse(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.owner_name, "Paulo Koye");
        assert_eq!(config.scroll.header_offset, 80.0);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = SiteConfig::parse(r#"{"owner_name":"Ada","timings":{"notification_ms":100}}"#)
            .unwrap();
        assert_eq!(config.owner_name, "Ada");
        assert_eq!(config.timings.notification_ms, 100);
        assert_eq!(config.timings.submit_delay_ms, 2000);
        assert_eq!(config.scroll, ScrollConfig::default());
        assert!(!config.enable_project_search);
        assert_eq!(config.simulated_delivery_error, None);
    }

    #[test]
    fn delivery_error_can_be_configured() {
        let config = SiteConfig::parse(r#"{"simulated_delivery_error":"offline"}"#).unwrap();
        assert_eq!(config.simulated_delivery_error.as_deref(), Some("offline"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(SiteConfig::parse("{ not json").is_err());
    }
}
