//! Logging utilities for airtable_diff
//!
//! This module provides logging setup and configuration.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Parse a level name, defaulting to INFO
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

/// Configured level for every target, unless `RUST_LOG` says otherwise
fn filter_for(level: Level, env: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .parse_lossy(env.unwrap_or_default())
}

fn env_filter(level: Level) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_for(level, env.as_deref())
}

fn install_error(e: impl std::fmt::Display) -> Error {
    Error::Unknown(e.to_string())
}

/// Initialize logging based on configuration.
///
/// Without a logging section, INFO-level text goes to stderr so that stdout
/// stays reserved for command output.
pub fn init_logging(config: &Option<LoggingConfig>) -> Result<()> {
    let config = match config {
        Some(cfg) => cfg,
        None => {
            return fmt::Subscriber::builder()
                .with_env_filter(env_filter(Level::INFO))
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(install_error);
        }
    };

    let env_filter = env_filter(parse_level(&config.level));
    let json = config.format.eq_ignore_ascii_case("json");

    if let Some(file_path) = &config.file {
        if let Some(parent) = Path::new(file_path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = Mutex::new(File::create(file_path)?);

        let builder = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_writer(file);
        if json {
            builder.json().try_init().map_err(install_error)
        } else {
            builder.try_init().map_err(install_error)
        }
    } else if config.stdout {
        let builder = fmt::Subscriber::builder().with_env_filter(env_filter);
        if json {
            builder.json().try_init().map_err(install_error)
        } else {
            builder.try_init().map_err(install_error)
        }
    } else {
        let builder = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr);
        if json {
            builder.json().try_init().map_err(install_error)
        } else {
            builder.try_init().map_err(install_error)
        }
    }
}
