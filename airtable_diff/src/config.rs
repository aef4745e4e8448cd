//! Configuration handling for airtable_diff

use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable holding the Airtable personal access token
pub const API_KEY_ENV: &str = "AIRTABLE_API_KEY";

/// Environment variable overriding the Airtable API root
pub const API_URL_ENV: &str = "AIRTABLE_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

/// Load configuration from a TOML file
pub fn load_from_file(path: &str) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| Error::ConfigError(format!("Failed to read config file: {}", e)))?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| Error::ConfigError(format!("Failed to parse config file: {}", e)))?;

    Ok(config)
}

/// Resolve the configuration: an optional file, then environment overrides
pub fn resolve(path: Option<&str>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_from_file(path)?,
        None => Config::default(),
    };
    config.apply_env_overrides(|key| std::env::var(key).ok());
    Ok(config)
}

/// Represents the complete airtable_diff configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub airtable: AirtableConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub diff: DiffConfig,
    pub logging: Option<LoggingConfig>,
}

impl Config {
    /// Apply overrides from a variable lookup (normally the process environment)
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.airtable.api_key = Some(key);
        }
        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.airtable.api_url = url;
        }
    }

    /// The credential used for Airtable requests.
    ///
    /// Fails with [`Error::ConfigError`] when no key is configured, so callers
    /// can reject a request before attempting any fetch.
    pub fn credential(&self) -> Result<String> {
        match self.airtable.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key.to_string()),
            _ => Err(Error::ConfigError(format!("{} is not set", API_KEY_ENV))),
        }
    }
}

/// Airtable API settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AirtableConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    pub api_key: Option<String>,
    /// Per-request timeout; 0 disables it
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl AirtableConfig {
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Schema comparison behavior
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct DiffConfig {
    #[serde(default)]
    pub duplicate_names: DuplicatePolicy,
}

/// What to do when a schema repeats a table name, or a table repeats a field name
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the first position and the last definition, logging a warning
    #[default]
    LastWriteWins,
    /// Refuse to compare
    Reject,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub stdout: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_format() -> String {
    "text".to_string()
}
