//! Dashboard configuration.
//!
//! The JSON file is embedded at build time; there is no runtime I/O.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

const APP_CONFIG_JSON: &str = include_str!("../config/app.json");

/// Labels and settings shown across the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Text next to the sidebar logo
    pub brand_name: String,
    /// Name used in the dashboard greeting
    pub teacher_name: String,
    pub welcome_message: String,
    /// Month label in the to-do list header
    pub todo_calendar_label: String,
    /// Console log level (off, error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_name: "Logo".to_string(),
            teacher_name: "Layla Walker".to_string(),
            welcome_message: "Welcome back to your dashboard".to_string(),
            todo_calendar_label: "March".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parsed log level, `Info` when unrecognised.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Parse a config document, falling back to defaults when it is malformed.
pub fn load_app_config_from_str(json: &str) -> (AppConfig, Option<serde_json::Error>) {
    match serde_json::from_str(json) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

/// Load the embedded config.
///
/// The parse error, if any, is returned so it can be logged once the
/// logger has been set up at the configured level.
pub fn load_app_config() -> (AppConfig, Option<serde_json::Error>) {
    load_app_config_from_str(APP_CONFIG_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let (config, error) = load_app_config_from_str(APP_CONFIG_JSON);
        assert!(error.is_none());
        assert_eq!(config.teacher_name, "Layla Walker");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let (config, error) = load_app_config_from_str(r#"{ "teacher_name": "Sam Ortiz" }"#);

        assert!(error.is_none());
        assert_eq!(config.teacher_name, "Sam Ortiz");
        assert_eq!(config.brand_name, "Logo");
        assert_eq!(config.todo_calendar_label, "March");
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let (config, error) = load_app_config_from_str("{ not json");

        assert!(error.is_some());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_level_filter() {
        let mut config = AppConfig::default();
        assert_eq!(config.level_filter(), LevelFilter::Info);

        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Debug);

        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
