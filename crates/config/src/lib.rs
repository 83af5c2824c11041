//! Configuration management for the Comprehend client
//!
//! Supports loading configuration from:
//! - TOML/YAML/JSON files (`config/default`, `config/{env}`)
//! - Environment variables (COMPREHEND__ prefix, `__` as nesting separator)
//! - Inline TOML, mostly for tests
//!
//! Credentials are never read here. They are discovered by the AWS SDK's
//! default provider chain when the client connects.

pub mod settings;

pub use settings::{load_settings, AwsSettings, Settings, DEFAULT_LANGUAGE_CODE};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<ConfigError> for comprehend_core::Error {
    fn from(err: ConfigError) -> Self {
        comprehend_core::Error::Config(err.to_string())
    }
}
