//! Error types for the HTTP source connector

use thiserror::Error;

use pulse_config::ConfigError;

/// Errors that can occur during connector operations
///
/// The driver decides what to do with a failed poll based on
/// [`ConnectorError::is_retryable`]: transient transport failures are worth
/// retrying, everything else is fatal for the cycle.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Invalid connector configuration
    #[error("invalid connector configuration: {0}")]
    Config(#[from] ConfigError),

    /// The base URL plus appended query string is not a valid URI
    #[error("malformed request URI '{uri}': {source}")]
    MalformedUri {
        /// The URI that failed to parse
        uri: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// Failed to initialize the HTTP client (e.g., TLS or proxy misconfiguration)
    #[error("failed to initialize HTTP client: {0}")]
    Init(String),

    /// The remote answered with a status outside [200, 300)
    #[error("HTTP request failed with status code: {status}")]
    RemoteRejected {
        /// The response status code
        status: u16,
    },

    /// The response body could not be decoded as text
    #[error("failed to decode HTTP response body as text")]
    UndecodableBody,

    /// Transport-level failure (timeout, connection refused, DNS, framing)
    #[error("transient I/O failure during HTTP request: {0}")]
    Transient(#[source] reqwest::Error),

    /// Poll was invoked before start or after stop
    #[error("task is not running")]
    NotStarted,

    /// The task was cancelled while waiting or mid-request
    #[error("poll cancelled")]
    Cancelled,
}

impl ConnectorError {
    /// Whether the driver may retry the poll that produced this error.
    ///
    /// Only transport-level failures qualify; the connector itself never
    /// retries, it only classifies.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_))
    }

    /// Whether this error is a cancellation rather than a failure
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_rejected_is_fatal() {
        let err = ConnectorError::RemoteRejected { status: 404 };
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_undecodable_body_is_fatal() {
        assert!(!ConnectorError::UndecodableBody.is_retryable());
    }

    #[test]
    fn test_cancelled_is_not_retryable() {
        let err = ConnectorError::Cancelled;
        assert!(!err.is_retryable());
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConnectorError::from(ConfigError::missing("topic"));
        assert!(err.to_string().contains("invalid connector configuration"));
    }
}
