//! Error types for the APB Registry

use thiserror::Error;

/// Result type alias for Registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Main error type for Registry operations
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Registry URL could not be turned into a request URL
    #[error("Invalid registry URL: {0}")]
    InvalidUrl(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Serialization/Deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::SerializationError(err.to_string())
    }
}

impl From<url::ParseError> for RegistryError {
    fn from(err: url::ParseError) -> Self {
        RegistryError::InvalidUrl(err.to_string())
    }
}
