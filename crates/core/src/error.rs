//! Error types for the Comprehend client

use thiserror::Error;

/// Result alias used by every crate in the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// Client errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The remote call failed outright (network, auth, throttling, service fault)
    #[error("Remote error: {0}")]
    Remote(String),

    /// A field the service declares present was absent in a success response
    #[error("Missing field in response: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// True when the failure happened before the service produced a response
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}
