//! Logging utilities for schema_map
//!
//! This module provides logging setup and configuration.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::fmt::{self, writer::BoxMakeWriter};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Parse a log level name, defaulting to INFO
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Initialize logging based on configuration
///
/// Installs a global subscriber writing to the configured file, or to stdout
/// when `stdout` is set. Without a configuration nothing is installed.
pub fn init_logging(config: &Option<LoggingConfig>) -> Result<()> {
    let config = match config {
        Some(cfg) => cfg,
        None => return Ok(()),
    };

    let level = parse_level(&config.level);
    let directive = format!("schema_map={}", level)
        .parse()
        .map_err(|e| Error::LoggingError(format!("Invalid log directive: {}", e)))?;
    let env_filter = EnvFilter::from_default_env().add_directive(directive);

    let writer = if let Some(file_path) = &config.file {
        if let Some(parent) = Path::new(file_path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        BoxMakeWriter::new(Mutex::new(File::create(file_path)?))
    } else if config.stdout {
        BoxMakeWriter::new(std::io::stdout)
    } else {
        return Ok(());
    };

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(writer);
    let json = config.format.eq_ignore_ascii_case("json");

    let installed = match (json, config.include_timestamps) {
        (true, true) => tracing::subscriber::set_global_default(builder.json().finish()),
        (true, false) => {
            tracing::subscriber::set_global_default(builder.json().without_time().finish())
        }
        (false, true) => tracing::subscriber::set_global_default(builder.finish()),
        (false, false) => tracing::subscriber::set_global_default(builder.without_time().finish()),
    };

    installed.map_err(|e| Error::LoggingError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names() {
        assert_eq!(parse_level("TRACE"), Level::TRACE);
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }

    #[test]
    fn no_config_installs_nothing() {
        assert!(init_logging(&None).is_ok());
    }

    #[test]
    fn no_destination_installs_nothing() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: None,
            format: "text".to_string(),
            stdout: false,
            include_timestamps: true,
        };

        assert!(init_logging(&Some(config)).is_ok());
    }
}
