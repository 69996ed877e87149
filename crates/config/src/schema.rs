//! Declarative option schema
//!
//! Every option the source understands is enumerated here with its dotted
//! external name, value type, default, and documentation. [`validate`]
//! enforces the ranges and required values against a loaded
//! [`HttpSourceConfig`]. The table is what an orchestration layer surfaces
//! for discovery; the struct in [`crate::http`] is the already-validated
//! view the connector consumes.

use crate::error::{ConfigError, Result};
use crate::http::HttpSourceConfig;

/// Minimum accepted poll interval
pub const MIN_POLL_INTERVAL_MS: u64 = 5_000;

/// Minimum accepted connect/read timeout
pub const MIN_TIMEOUT_MS: u64 = 1_000;

/// Value type of an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Plain string value
    String,
    /// Integer value
    Int,
    /// Secret value, redacted in logs and UIs
    Password,
}

/// A single entry in the option table
#[derive(Debug, Clone, Copy)]
pub struct OptionDef {
    /// External dotted option name
    pub name: &'static str,
    /// Value type
    pub kind: OptionKind,
    /// Default rendered as text; `None` when the option is required
    pub default: Option<&'static str>,
    /// Human-readable description
    pub doc: &'static str,
}

/// All options understood by the HTTP source
pub const OPTIONS: &[OptionDef] = &[
    OptionDef {
        name: "topic",
        kind: OptionKind::String,
        default: None,
        doc: "The topic to write the fetched data to.",
    },
    OptionDef {
        name: "http.url",
        kind: OptionKind::String,
        default: Some("https://httpbin.org/get"),
        doc: "The base HTTP URL to fetch data from.",
    },
    OptionDef {
        name: "http.method",
        kind: OptionKind::String,
        default: Some("GET"),
        doc: "The HTTP method to use for requests. One of GET, POST, PUT, PATCH, DELETE.",
    },
    OptionDef {
        name: "http.query.params",
        kind: OptionKind::String,
        default: Some(""),
        doc: "Optional query parameters appended to the HTTP request URL in 'key=value' \
              pairs separated by '&'. Example: 'updatedSince=2023-01-01&limit=100'.",
    },
    OptionDef {
        name: "http.headers",
        kind: OptionKind::String,
        default: Some(""),
        doc: "Optional HTTP request headers in 'key=value' pairs separated by commas. \
              Example: 'Accept=application/json'.",
    },
    OptionDef {
        name: "http.request.body",
        kind: OptionKind::String,
        default: Some(""),
        doc: "The HTTP request body to be sent with the request. Only applicable for \
              methods like POST and PUT.",
    },
    OptionDef {
        name: "http.poll.interval.ms",
        kind: OptionKind::Int,
        default: Some("60000"),
        doc: "Polling interval in milliseconds between consecutive HTTP requests. \
              Minimum allowed is 5000 ms. Default is 60000 ms (1 minute).",
    },
    OptionDef {
        name: "http.auth.username",
        kind: OptionKind::String,
        default: Some(""),
        doc: "Username for HTTP Basic Authentication. Used together with 'http.auth.password'.",
    },
    OptionDef {
        name: "http.auth.password",
        kind: OptionKind::Password,
        default: Some(""),
        doc: "Password for HTTP Basic Authentication. Used together with 'http.auth.username'.",
    },
    OptionDef {
        name: "http.auth.bearer",
        kind: OptionKind::Password,
        default: Some(""),
        doc: "Bearer token for the Authorization header. Takes precedence over basic auth.",
    },
    OptionDef {
        name: "http.connect.timeout.ms",
        kind: OptionKind::Int,
        default: Some("5000"),
        doc: "Timeout in milliseconds for establishing the HTTP connection. Default is 5000 ms.",
    },
    OptionDef {
        name: "http.read.timeout.ms",
        kind: OptionKind::Int,
        default: Some("10000"),
        doc: "Timeout in milliseconds for reading the HTTP response. Default is 10000 ms.",
    },
    OptionDef {
        name: "http.proxy.host",
        kind: OptionKind::String,
        default: Some(""),
        doc: "Optional HTTP proxy host. The proxy is used only when both host and port are set.",
    },
    OptionDef {
        name: "http.proxy.port",
        kind: OptionKind::Int,
        default: Some("0"),
        doc: "Optional HTTP proxy port.",
    },
];

/// Look up an option definition by its external name
pub fn option(name: &str) -> Option<&'static OptionDef> {
    OPTIONS.iter().find(|def| def.name == name)
}

/// Validate a loaded config against the schema
pub fn validate(config: &HttpSourceConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(ConfigError::missing("http.url"));
    }
    if config.topic.is_empty() {
        return Err(ConfigError::missing("topic"));
    }
    if config.poll_interval_ms < MIN_POLL_INTERVAL_MS {
        return Err(ConfigError::below_minimum(
            "http.poll.interval.ms",
            MIN_POLL_INTERVAL_MS,
            config.poll_interval_ms,
        ));
    }
    if config.connect_timeout_ms < MIN_TIMEOUT_MS {
        return Err(ConfigError::below_minimum(
            "http.connect.timeout.ms",
            MIN_TIMEOUT_MS,
            config.connect_timeout_ms,
        ));
    }
    if config.read_timeout_ms < MIN_TIMEOUT_MS {
        return Err(ConfigError::below_minimum(
            "http.read.timeout.ms",
            MIN_TIMEOUT_MS,
            config.read_timeout_ms,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> HttpSourceConfig {
        HttpSourceConfig {
            topic: "http-records".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        validate(&valid_config()).unwrap();
    }

    #[test]
    fn test_empty_topic_rejected() {
        let config = HttpSourceConfig::default();
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::MissingValue { option: "topic" }));
    }

    #[test]
    fn test_empty_url_rejected() {
        let config = HttpSourceConfig {
            url: String::new(),
            ..valid_config()
        };
        let err = validate(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingValue { option: "http.url" }
        ));
    }

    #[test]
    fn test_poll_interval_below_minimum() {
        let config = HttpSourceConfig {
            poll_interval_ms: 4_999,
            ..valid_config()
        };
        let err = validate(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::BelowMinimum {
                option: "http.poll.interval.ms",
                min: MIN_POLL_INTERVAL_MS,
                value: 4_999,
            }
        ));
    }

    #[test]
    fn test_timeouts_below_minimum() {
        let config = HttpSourceConfig {
            connect_timeout_ms: 999,
            ..valid_config()
        };
        assert!(validate(&config).is_err());

        let config = HttpSourceConfig {
            read_timeout_ms: 500,
            ..valid_config()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_minimums_are_accepted() {
        let config = HttpSourceConfig {
            poll_interval_ms: MIN_POLL_INTERVAL_MS,
            connect_timeout_ms: MIN_TIMEOUT_MS,
            read_timeout_ms: MIN_TIMEOUT_MS,
            ..valid_config()
        };
        validate(&config).unwrap();
    }

    #[test]
    fn test_option_lookup() {
        let def = option("http.poll.interval.ms").unwrap();
        assert_eq!(def.kind, OptionKind::Int);
        assert_eq!(def.default, Some("60000"));

        assert!(option("no.such.option").is_none());
    }

    #[test]
    fn test_required_options_have_no_default() {
        let required: Vec<_> = OPTIONS.iter().filter(|def| def.default.is_none()).collect();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0].name, "topic");
    }

    #[test]
    fn test_secrets_are_passwords() {
        assert_eq!(
            option("http.auth.password").unwrap().kind,
            OptionKind::Password
        );
        assert_eq!(
            option("http.auth.bearer").unwrap().kind,
            OptionKind::Password
        );
    }
}
