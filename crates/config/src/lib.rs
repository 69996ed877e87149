//! Pulse Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! Minimal config should just work - only specify what you need to change.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use pulse_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[source]\ntopic = \"http-records\"").unwrap();
//! ```
//!
//! # Example Minimal Config
//!
//! ```toml
//! [source]
//! url = "https://api.example.com/items"
//! topic = "http-records"
//! ```
//!
//! # Example Full Config
//!
//! See `configs/example.toml` for all available options.

mod error;
mod http;
mod logging;
mod method;
mod schema;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

pub use error::{ConfigError, Result};
pub use http::{
    DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_POLL_INTERVAL_MS, DEFAULT_READ_TIMEOUT_MS, DEFAULT_URL,
    HttpSourceConfig,
};
pub use logging::{LogConfig, LogLevel};
pub use method::{ALLOWED_METHODS, HttpMethod};
pub use schema::{
    MIN_POLL_INTERVAL_MS, MIN_TIMEOUT_MS, OPTIONS, OptionDef, OptionKind, option,
};

/// Main configuration structure
///
/// All sections are optional with sensible defaults, except that the source
/// must name a destination topic before it validates.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings
    pub log: LogConfig,

    /// The polled HTTP endpoint
    pub source: HttpSourceConfig,

    /// Number of identical worker tasks to run
    /// Default: 1
    pub max_tasks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            source: HttpSourceConfig::default(),
            max_tasks: 1,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        content.parse()
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_tasks == 0 {
            return Err(ConfigError::invalid_value(
                "max_tasks",
                "must be at least 1",
            ));
        }
        self.source.validate()
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_has_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.max_tasks, 1);
        assert_eq!(config.log.level, LogLevel::Info);
        assert_eq!(config.source.url, DEFAULT_URL);
    }

    #[test]
    fn test_default_config_needs_topic() {
        let config = Config::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
max_tasks = 3

[log]
level = "debug"

[source]
url = "https://api.example.com/items"
method = "GET"
poll_interval_ms = 30000
topic = "items"
"#;
        let config = Config::from_str(toml).unwrap();
        config.validate().unwrap();
        assert_eq!(config.max_tasks, 3);
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.source.poll_interval_ms, 30_000);
    }

    #[test]
    fn test_zero_tasks_rejected() {
        let toml = r#"
max_tasks = 0

[source]
topic = "items"
"#;
        let config = Config::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/no/such/file.toml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }
}
