use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub title: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the auth service, with trailing slash
    pub base_url: String,
}

impl ApiConfig {
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[app]
title = "Driving Behavior Monitor"

[api]
base_url = "https://driving-behavior-analysis-system.onrender.com/api/"

[log]
level = "info"
"#;

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Load configuration
///
/// Search order:
/// 1. The override document, if given (embedded by the frontend build)
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> Result<AppConfig, ConfigError> {
    if let Some(contents) = override_toml.filter(|c| !c.trim().is_empty()) {
        log::info!("Loading config from override document");
        return AppConfig::from_toml_str(contents);
    }

    log::info!("Using default embedded configuration");
    AppConfig::from_toml_str(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config.app.title, "Driving Behavior Monitor");
        assert_eq!(config.log.level, LogLevel::Info);
    }

    #[test]
    fn test_blank_override_falls_back() {
        let config = load_config(Some("  \n")).unwrap();
        assert_eq!(config, AppConfig::from_toml_str(DEFAULT_CONFIG).unwrap());
    }

    #[test]
    fn test_override_without_log_section() {
        let config = load_config(Some(
            r#"
            [app]
            title = "Fleet"
            [api]
            base_url = "http://localhost:8000/api"
            "#,
        ))
        .unwrap();
        assert_eq!(config.app.title, "Fleet");
        assert_eq!(config.log.level, LogLevel::Info);
        assert_eq!(
            config.api.endpoint("admin_login/"),
            "http://localhost:8000/api/admin_login/"
        );
    }

    #[test]
    fn test_malformed_override_is_error() {
        let result = load_config(Some("[app]\ntitle = 5"));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_log_level_maps_to_log_crate() {
        assert_eq!(log::Level::from(LogLevel::Debug), log::Level::Debug);
    }
}
