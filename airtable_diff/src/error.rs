//! Error types for airtable_diff

use thiserror::Error;

/// Result type for airtable_diff operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for airtable_diff
///
/// The schema differ itself never produces one of these; every variant comes
/// from configuration, fetching, validation or presentation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to fetch schema for base {base_id}: {message}")]
    FetchError { base_id: String, message: String },

    #[error("Airtable API error: {0}")]
    ApiError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl Error {
    /// Build a fetch error for the given base
    pub fn fetch(base_id: impl Into<String>, message: impl Into<String>) -> Self {
        Error::FetchError {
            base_id: base_id.into(),
            message: message.into(),
        }
    }
}

/// Convert Serde JSON errors to airtable_diff errors
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerializationError(error.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(error: serde_yaml::Error) -> Self {
        Error::SerializationError(error.to_string())
    }
}

/// Convert TOML deserialization errors to airtable_diff errors
impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::ConfigError(error.to_string())
    }
}
