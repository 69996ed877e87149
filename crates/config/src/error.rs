//! Configuration error types

use std::io;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("failed to read config file '{path}': {source}")]
    IoError {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Validation error - a required option has no value
    #[error("option '{option}' is missing a required value")]
    MissingValue {
        /// External name of the option
        option: &'static str,
    },

    /// Validation error - numeric option below its minimum
    #[error("option '{option}' must be at least {min}, got {value}")]
    BelowMinimum {
        /// External name of the option
        option: &'static str,
        /// Lowest accepted value
        min: u64,
        /// Value found in the config
        value: u64,
    },

    /// Validation error - option value is not usable
    #[error("option '{option}' has an invalid value: {reason}")]
    InvalidValue {
        /// External name of the option
        option: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Create a MissingValue error
    pub fn missing(option: &'static str) -> Self {
        Self::MissingValue { option }
    }

    /// Create a BelowMinimum error
    pub fn below_minimum(option: &'static str, min: u64, value: u64) -> Self {
        Self::BelowMinimum { option, min, value }
    }

    /// Create an InvalidValue error
    pub fn invalid_value(option: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            option,
            reason: reason.into(),
        }
    }
}
