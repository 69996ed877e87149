//! HTTP execution
//!
//! Owns the pooled HTTP client for one task. The client is built once at
//! task start with the configured timeouts and optional proxy, reused for
//! every poll, and dropped at task stop. [`execute`] classifies each
//! outcome: 2xx with a text body is success, everything else maps onto the
//! retryable/fatal split in [`ConnectorError`].
//!
//! [`execute`]: HttpApiClient::execute

use reqwest::Method;
use tracing::debug;

use pulse_config::{HttpMethod, HttpSourceConfig};

use crate::error::ConnectorError;
use crate::request::RequestDescriptor;

/// A reusable HTTP client for polling requests
pub struct HttpApiClient {
    client: reqwest::Client,
}

impl HttpApiClient {
    /// Build the pooled client from the endpoint configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Init`] if client creation fails (e.g., TLS
    /// or proxy misconfiguration).
    pub fn new(config: &HttpSourceConfig) -> Result<Self, ConnectorError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("pulse/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(config.connect_timeout())
            .read_timeout(config.read_timeout());

        if config.has_proxy() {
            let proxy_url = format!("http://{}:{}", config.proxy_host, config.proxy_port);
            let proxy = reqwest::Proxy::all(&proxy_url)
                .map_err(|e| ConnectorError::Init(format!("proxy '{}': {}", proxy_url, e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| ConnectorError::Init(e.to_string()))?;

        Ok(Self { client })
    }

    /// Execute a request and return the response body as text
    ///
    /// # Errors
    ///
    /// - [`ConnectorError::Transient`] for transport failures (timeout,
    ///   connection refused, DNS, malformed response framing) - retryable.
    /// - [`ConnectorError::RemoteRejected`] for a status outside [200, 300).
    /// - [`ConnectorError::UndecodableBody`] when the body is not valid text.
    pub async fn execute(&self, request: RequestDescriptor) -> Result<String, ConnectorError> {
        debug!(method = %request.method, url = %request.url, "executing HTTP request");

        let mut builder = self
            .client
            .request(as_reqwest_method(request.method), request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(ConnectorError::Transient)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConnectorError::RemoteRejected {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(ConnectorError::Transient)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| ConnectorError::UndecodableBody)
    }

    /// Release the pooled connections
    ///
    /// Dropping the client tears the pool down; this exists so task shutdown
    /// is explicit in the call flow.
    pub fn close(self) {
        debug!("closing pooled HTTP client");
        drop(self.client);
    }
}

fn as_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}
