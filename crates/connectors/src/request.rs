//! Request construction
//!
//! Turns the declarative endpoint configuration into a fully formed request
//! descriptor: resolved URL, header map, optional body, auth header. Pure
//! string-to-descriptor work, no I/O.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use tracing::warn;
use url::Url;

use pulse_config::{ConfigError, HttpMethod, HttpSourceConfig};

use crate::error::ConnectorError;

/// A fully formed request, ready for execution
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: HttpMethod,
    /// Resolved URL with query parameters appended
    pub url: Url,
    /// Header mapping; keys are unique, last write wins
    pub headers: HeaderMap,
    /// Request body, present only for methods that carry one
    pub body: Option<String>,
}

/// Builds request descriptors from the configured request shape
///
/// Construction captures the static request parts once; [`build`] is then
/// invoked per poll with the base URL and method.
///
/// [`build`]: RequestBuilder::build
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    query_params: String,
    headers: String,
    body: String,
    auth_username: String,
    auth_password: String,
    auth_bearer: String,
}

impl RequestBuilder {
    /// Capture the request shape from an endpoint configuration
    pub fn from_config(config: &HttpSourceConfig) -> Self {
        Self {
            query_params: config.query_params.clone(),
            headers: config.headers.clone(),
            body: config.request_body.clone(),
            auth_username: config.auth_username.clone(),
            auth_password: config.auth_password.clone(),
            auth_bearer: config.auth_bearer.clone(),
        }
    }

    /// Build a request descriptor for the given base URL and method
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::MalformedUri`] when the base URL plus
    /// appended query string does not parse as a URI, or a configuration
    /// error when an auth credential cannot form a header value.
    pub fn build(
        &self,
        base_url: &str,
        method: HttpMethod,
    ) -> Result<RequestDescriptor, ConnectorError> {
        let url = self.url_with_params(base_url)?;
        let mut headers = self.parse_headers();
        self.apply_auth(&mut headers)?;

        let body = if method.allows_body() && !self.body.is_empty() {
            Some(self.body.clone())
        } else {
            None
        };

        Ok(RequestDescriptor {
            method,
            url,
            headers,
            body,
        })
    }

    /// Append the configured query string to the base URL
    ///
    /// Uses `?` when the base has no query component yet, `&` otherwise.
    /// The param string is raw caller text; no additional encoding is
    /// performed.
    fn url_with_params(&self, base_url: &str) -> Result<Url, ConnectorError> {
        let full = if self.query_params.is_empty() {
            base_url.to_string()
        } else {
            let separator = if base_url.contains('?') { '&' } else { '?' };
            format!("{}{}{}", base_url, separator, self.query_params)
        };

        Url::parse(&full).map_err(|source| ConnectorError::MalformedUri { uri: full, source })
    }

    /// Parse the comma-separated "key=value" header string
    ///
    /// Pairs are split on the first `=` with whitespace trimmed from both
    /// sides. Pairs without an `=`, or with names/values the HTTP layer
    /// rejects, are skipped with a warning; the request proceeds without
    /// them.
    fn parse_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if self.headers.is_empty() {
            return headers;
        }

        for raw in self.headers.split(',') {
            let Some((key, value)) = raw.split_once('=') else {
                warn!(header = raw, "skipping invalid header format");
                continue;
            };

            let name = match HeaderName::from_bytes(key.trim().as_bytes()) {
                Ok(name) => name,
                Err(_) => {
                    warn!(header = raw, "skipping header with invalid name");
                    continue;
                }
            };
            let value = match HeaderValue::from_str(value.trim()) {
                Ok(value) => value,
                Err(_) => {
                    warn!(header = raw, "skipping header with invalid value");
                    continue;
                }
            };

            headers.insert(name, value);
        }

        headers
    }

    /// Set the Authorization header from the configured credentials
    ///
    /// A non-empty bearer token wins; otherwise basic auth is used when both
    /// username and password are set. Never emits both.
    fn apply_auth(&self, headers: &mut HeaderMap) -> Result<(), ConnectorError> {
        if !self.auth_bearer.is_empty() {
            let value = HeaderValue::from_str(&format!("Bearer {}", self.auth_bearer))
                .map_err(|_| {
                    ConfigError::invalid_value("http.auth.bearer", "not a valid header value")
                })?;
            headers.insert(AUTHORIZATION, value);
        } else if !self.auth_username.is_empty() && !self.auth_password.is_empty() {
            let credentials =
                BASE64.encode(format!("{}:{}", self.auth_username, self.auth_password));
            let value = HeaderValue::from_str(&format!("Basic {}", credentials)).map_err(|_| {
                ConfigError::invalid_value("http.auth.username", "not a valid header value")
            })?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(())
    }
}
