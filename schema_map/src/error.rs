//! Error types for schema_map

use thiserror::Error;

use crate::reflect::Kind;

/// Result type for schema_map operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for schema_map
#[derive(Error, Debug)]
pub enum Error {
    /// A member's type has no storage type mapping
    #[error("Unsupported SQL type: {name} ({kind})")]
    UnsupportedType { name: String, kind: Kind },

    /// The parsed value is not a struct with named fields
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Convert Serde JSON errors to schema_map errors
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerializationError(error.to_string())
    }
}

/// Convert TOML deserialization errors to schema_map errors
impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::ConfigError(error.to_string())
    }
}
