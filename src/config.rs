//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::charts::{ChartOptions, RangePolicy};
use crate::dashboard::{SliderDomain, SliderSettings, DASHBOARD_TITLE};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,

    /// Fail startup on the first malformed row
    #[serde(default)]
    pub strict: bool,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("spacex_launch_dash.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            strict: false,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dashboard presentation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub slider: SliderSettings,

    #[serde(default)]
    pub scatter_range_policy: RangePolicy,
}

fn default_title() -> String {
    DASHBOARD_TITLE.to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            slider: SliderSettings::default(),
            scatter_range_policy: RangePolicy::default(),
        }
    }
}

impl DashboardConfig {
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            scatter_range_policy: self.scatter_range_policy,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// First existing config file among the default locations
    pub fn default_location() -> Option<PathBuf> {
        [
            Some(PathBuf::from("./launchboard.toml")),
            dirs::config_dir().map(|p| p.join("launchboard").join("config.toml")),
        ]
        .into_iter()
        .flatten()
        .find(|path| path.exists())
    }

    /// Load from the default location, or the environment alone if there is none
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_optional(Self::default_location().as_deref())
    }

    /// Load `path` with environment overrides, or the environment alone
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Self::from_env(),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (`LAUNCHBOARD_*` names)
    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        // Dataset overrides
        if let Some(path) = lookup("LAUNCHBOARD_DATASET") {
            self.dataset.path = PathBuf::from(path);
        }
        if let Some(strict) = lookup("LAUNCHBOARD_STRICT") {
            self.dataset.strict = parse_flag(&strict);
        }

        // API overrides
        if let Some(host) = lookup("LAUNCHBOARD_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("LAUNCHBOARD_PORT") {
            self.api.port = port
                .parse()
                .map_err(|_| invalid_env("LAUNCHBOARD_PORT", &port))?;
        }

        // Dashboard overrides
        if let Some(policy) = lookup("LAUNCHBOARD_SCATTER_RANGE_POLICY") {
            self.dashboard.scatter_range_policy = match policy.as_str() {
                "always" => RangePolicy::Always,
                "all_sites_only" => RangePolicy::AllSitesOnly,
                other => return Err(invalid_env("LAUNCHBOARD_SCATTER_RANGE_POLICY", other)),
            };
        }
        if let Some(domain) = lookup("LAUNCHBOARD_SLIDER_DOMAIN") {
            self.dashboard.slider.domain = match domain.as_str() {
                "fixed" => SliderDomain::Fixed,
                "data" => SliderDomain::Data,
                "covering" => SliderDomain::Covering,
                other => return Err(invalid_env("LAUNCHBOARD_SLIDER_DOMAIN", other)),
            };
        }

        // Logging overrides
        if let Some(level) = lookup("LAUNCHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LAUNCHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}

fn invalid_env(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnv {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.to_lowercase();
    value != "false" && value != "0"
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            api: ApiConfig::default(),
            dashboard: DashboardConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: String, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Launchboard Configuration
#
# Environment variables override these settings:
# - LAUNCHBOARD_DATASET
# - LAUNCHBOARD_STRICT
# - LAUNCHBOARD_HOST
# - LAUNCHBOARD_PORT
# - LAUNCHBOARD_SCATTER_RANGE_POLICY
# - LAUNCHBOARD_SLIDER_DOMAIN
# - LAUNCHBOARD_LOG_LEVEL
# - LAUNCHBOARD_LOG_FORMAT

[dataset]
# CSV file with launch records
path = "spacex_launch_dash.csv"

# Fail startup on the first malformed row instead of skipping it
strict = false

[api]
# Server host
host = "127.0.0.1"

# Server port
port = 8050

# Allowed CORS origins (empty = same origin only)
cors_origins = []

[dashboard]
title = "SpaceX Launch Records Dashboard"

# all_sites_only: the payload range filters the scatter only when all sites are selected
# always: the payload range also filters single-site views
scatter_range_policy = "all_sites_only"

[dashboard.slider]
min = 0.0
max = 10000.0
step = 1000.0

# fixed: [min, max]; data: observed payload bounds; covering: [min, max] widened to the data
domain = "covering"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dataset.path, PathBuf::from("spacex_launch_dash.csv"));
        assert!(!config.dataset.strict);
        assert_eq!(config.api.addr(), "127.0.0.1:8050");
        assert_eq!(config.dashboard.title, "SpaceX Launch Records Dashboard");
        assert_eq!(config.dashboard.slider.step, 1000.0);
        assert_eq!(config.dashboard.scatter_range_policy, RangePolicy::AllSitesOnly);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 8050);
        assert_eq!(config.dashboard.slider.max, 10000.0);
        assert_eq!(config.dashboard.slider.domain, SliderDomain::Covering);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
[api]
port = 9000

[dashboard]
scatter_range_policy = "always"

[dashboard.slider]
domain = "data"
"#,
        )
        .unwrap();

        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.dashboard.scatter_range_policy, RangePolicy::Always);
        assert_eq!(config.dashboard.slider.domain, SliderDomain::Data);
        assert_eq!(config.dashboard.slider.step, 1000.0);
        assert_eq!(config.dataset.path, PathBuf::from("spacex_launch_dash.csv"));
    }

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup_from(&[
                ("LAUNCHBOARD_DATASET", "/data/launches.csv"),
                ("LAUNCHBOARD_STRICT", "true"),
                ("LAUNCHBOARD_PORT", "8080"),
                ("LAUNCHBOARD_SCATTER_RANGE_POLICY", "always"),
                ("LAUNCHBOARD_SLIDER_DOMAIN", "data"),
            ]))
            .unwrap();

        assert_eq!(config.dataset.path, PathBuf::from("/data/launches.csv"));
        assert!(config.dataset.strict);
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.dashboard.scatter_range_policy, RangePolicy::Always);
        assert_eq!(config.dashboard.slider.domain, SliderDomain::Data);
    }

    #[test]
    fn test_invalid_overrides_are_errors() {
        for (key, value) in [
            ("LAUNCHBOARD_PORT", "not a number"),
            ("LAUNCHBOARD_SCATTER_RANGE_POLICY", "sometimes"),
            ("LAUNCHBOARD_SLIDER_DOMAIN", "bogus"),
        ] {
            let mut config = Config::default();
            let err = config
                .apply_overrides(lookup_from(&[(key, value)]))
                .unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidEnv { key: ref k, value: ref v } if k == key && v == value),
                "unexpected error for {}: {}",
                key,
                err
            );
        }
    }

    #[test]
    fn test_malformed_config_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nport = \"not a number\"").unwrap();

        let err = Config::load_optional(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dataset]\npath = \"other.csv\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("other.csv"));
    }

    #[test]
    fn test_load_errors() {
        let err = Config::load(Path::new("/nonexistent/launchboard.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nport = ").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
