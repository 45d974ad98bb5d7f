//! Configuration handling for schema_map

use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::{Error, Result};

/// Annotation key read from `#[tag(...)]` when none is configured
pub const DEFAULT_TAG_KEY: &str = "orm";

/// Load configuration from a TOML file
pub fn load_from_file(path: &str) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| Error::ConfigError(format!("Failed to read config file: {}", e)))?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| Error::ConfigError(format!("Failed to parse config file: {}", e)))?;

    Ok(config)
}

/// Represents the complete schema_map configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    pub logging: Option<LoggingConfig>,
}

/// Schema parser configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ParserConfig {
    /// Annotation key whose value becomes a field's tag
    #[serde(default = "default_tag_key")]
    pub tag_key: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            tag_key: default_tag_key(),
        }
    }
}

fn default_tag_key() -> String {
    DEFAULT_TAG_KEY.to_string()
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    pub format: String,
    pub stdout: bool,
    pub include_timestamps: bool,
}
