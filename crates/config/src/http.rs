//! HTTP source configuration
//!
//! Options mirror the declarative table in [`crate::schema`]; defaults are
//! applied by serde so a minimal config only names what it changes.
//!
//! # Example
//!
//! ```toml
//! [source]
//! url = "https://api.example.com/items"
//! query_params = "limit=100"
//! headers = "Accept=application/json"
//! poll_interval_ms = 60000
//! topic = "http-items"
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;
use crate::method::HttpMethod;
use crate::schema;

/// Default endpoint, a public echo service useful for smoke tests
pub const DEFAULT_URL: &str = "https://httpbin.org/get";

/// Default poll interval (1 minute)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 60_000;

/// Default connection timeout
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;

/// Default response read timeout
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;

/// Configuration for one polled HTTP endpoint
///
/// Built once at startup and treated as immutable afterwards. Every task
/// spawned for the source receives a clone of the same config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpSourceConfig {
    /// Base URL to fetch data from
    pub url: String,

    /// HTTP method used for every request
    pub method: HttpMethod,

    /// Raw query string appended to the URL, e.g. "limit=100&since=2023-01-01".
    /// The value is used as-is; no additional encoding is performed.
    pub query_params: String,

    /// Request headers as comma-separated "key=value" pairs,
    /// e.g. "Accept=application/json, X-Request-Source=pulse"
    pub headers: String,

    /// Request body, sent only with methods that carry one (POST, PUT, PATCH)
    pub request_body: String,

    /// Milliseconds between consecutive polls
    pub poll_interval_ms: u64,

    /// Username for HTTP Basic authentication
    pub auth_username: String,

    /// Password for HTTP Basic authentication
    pub auth_password: String,

    /// Bearer token for the Authorization header.
    /// Takes precedence over basic auth when both are configured.
    pub auth_bearer: String,

    /// Timeout in milliseconds for establishing the connection
    pub connect_timeout_ms: u64,

    /// Timeout in milliseconds for reading the response
    pub read_timeout_ms: u64,

    /// HTTP proxy host ("" disables the proxy)
    pub proxy_host: String,

    /// HTTP proxy port (0 disables the proxy)
    pub proxy_port: u16,

    /// Destination topic for produced records
    pub topic: String,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            method: HttpMethod::Get,
            query_params: String::new(),
            headers: String::new(),
            request_body: String::new(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            auth_username: String::new(),
            auth_password: String::new(),
            auth_bearer: String::new(),
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            proxy_host: String::new(),
            proxy_port: 0,
            topic: String::new(),
        }
    }
}

impl HttpSourceConfig {
    /// Validate against the option schema (ranges, required values)
    pub fn validate(&self) -> Result<()> {
        schema::validate(self)
    }

    /// Poll interval as a Duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Connection timeout as a Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Read timeout as a Duration
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Whether a proxy is fully configured (host and port both set)
    pub fn has_proxy(&self) -> bool {
        !self.proxy_host.is_empty() && self.proxy_port > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HttpSourceConfig::default();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.method, HttpMethod::Get);
        assert_eq!(config.poll_interval_ms, 60_000);
        assert_eq!(config.connect_timeout_ms, 5_000);
        assert_eq!(config.read_timeout_ms, 10_000);
        assert!(config.query_params.is_empty());
        assert!(config.topic.is_empty());
        assert!(!config.has_proxy());
    }

    #[test]
    fn test_from_toml_minimal() {
        let config: HttpSourceConfig = toml::from_str("topic = \"http-records\"").unwrap();
        assert_eq!(config.topic, "http-records");
        assert_eq!(config.url, DEFAULT_URL);
        config.validate().unwrap();
    }

    #[test]
    fn test_from_toml_full() {
        let toml = r#"
url = "https://api.example.com/items"
method = "POST"
query_params = "limit=100"
headers = "Accept=application/json"
request_body = "{\"q\": \"all\"}"
poll_interval_ms = 15000
auth_bearer = "token123"
connect_timeout_ms = 2000
read_timeout_ms = 4000
proxy_host = "proxy.internal"
proxy_port = 8080
topic = "items"
"#;
        let config: HttpSourceConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.method, HttpMethod::Post);
        assert_eq!(config.query_params, "limit=100");
        assert_eq!(config.auth_bearer, "token123");
        assert!(config.has_proxy());
        config.validate().unwrap();
    }

    #[test]
    fn test_durations() {
        let config = HttpSourceConfig {
            poll_interval_ms: 5_000,
            connect_timeout_ms: 1_000,
            read_timeout_ms: 1_500,
            ..Default::default()
        };
        assert_eq!(config.poll_interval(), Duration::from_millis(5_000));
        assert_eq!(config.connect_timeout(), Duration::from_millis(1_000));
        assert_eq!(config.read_timeout(), Duration::from_millis(1_500));
    }

    #[test]
    fn test_proxy_requires_host_and_port() {
        let host_only = HttpSourceConfig {
            proxy_host: "proxy.internal".into(),
            ..Default::default()
        };
        assert!(!host_only.has_proxy());

        let port_only = HttpSourceConfig {
            proxy_port: 8080,
            ..Default::default()
        };
        assert!(!port_only.has_proxy());
    }
}
