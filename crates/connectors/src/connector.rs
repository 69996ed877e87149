//! Connector lifecycle
//!
//! Entry point for an orchestration layer: holds the validated source
//! configuration between `start` and `stop` and fans it out to the
//! requested number of identical task configurations. All polling logic
//! lives in [`crate::task`]; this is bookkeeping.

use tracing::info;

use pulse_config::HttpSourceConfig;

use crate::error::ConnectorError;

/// HTTP source connector
///
/// Every task receives the same configuration; parallel tasks polling the
/// same URL share one partition and therefore one offset.
#[derive(Debug, Default)]
pub struct HttpSourceConnector {
    config: Option<HttpSourceConfig>,
}

impl HttpSourceConnector {
    /// Create a stopped connector
    pub fn new() -> Self {
        Self::default()
    }

    /// Connector version
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Start the connector with a validated configuration
    pub fn start(&mut self, config: HttpSourceConfig) -> Result<(), ConnectorError> {
        config.validate()?;
        info!(url = %config.url, topic = %config.topic, "starting HTTP source connector");
        self.config = Some(config);
        Ok(())
    }

    /// Produce `max_tasks` identical task configurations
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::NotStarted`] if called before `start`.
    pub fn task_configs(&self, max_tasks: usize) -> Result<Vec<HttpSourceConfig>, ConnectorError> {
        let config = self.config.as_ref().ok_or(ConnectorError::NotStarted)?;
        Ok(vec![config.clone(); max_tasks])
    }

    /// Stop the connector
    pub fn stop(&mut self) {
        info!("stopping HTTP source connector");
        self.config = None;
    }
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
    fn test_task_configs_before_start() {
        let connector = HttpSourceConnector::new();
        assert!(matches!(
            connector.task_configs(1),
            Err(ConnectorError::NotStarted)
        ));
    }

    #[test]
    fn test_start_rejects_invalid_config() {
        let mut connector = HttpSourceConnector::new();
        let result = connector.start(HttpSourceConfig::default());
        assert!(matches!(result, Err(ConnectorError::Config(_))));
    }

    #[test]
    fn test_task_configs_fan_out() {
        let mut connector = HttpSourceConnector::new();
        connector.start(valid_config()).unwrap();

        let configs = connector.task_configs(3).unwrap();
        assert_eq!(configs.len(), 3);
        for config in &configs {
            assert_eq!(config.topic, "http-records");
        }
    }

    #[test]
    fn test_stop_clears_config() {
        let mut connector = HttpSourceConnector::new();
        connector.start(valid_config()).unwrap();
        connector.stop();
        assert!(matches!(
            connector.task_configs(1),
            Err(ConnectorError::NotStarted)
        ));
    }
}
