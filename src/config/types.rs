//! Configuration types.
//!
//! This module defines the library configuration and the logging enums used
//! when initializing the logger.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::constants::{DEFAULT_COUNTRY, DEFAULT_USER_AGENT, FRAME_FETCH_TIMEOUT_SECS};
use crate::parse::LinkFilter;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for machine parsing
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration.
///
/// Can be built programmatically or deserialized from JSON. Missing fields
/// fall back to their defaults.
///
/// # Examples
///
/// ```
/// use jobmail_extract::Config;
///
/// let config = Config {
///     frame_base_url: Some("https://www.stepstone.de/".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.default_country, "Deutschland");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter applied to extracted links and URLs
    pub link_filter: LinkFilter,

    /// Country assigned when a zip code hits the postal table
    pub default_country: String,

    /// Base URL used to resolve relative frame sources
    pub frame_base_url: Option<String>,

    /// Per-request timeout for frame fetches in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value for frame fetches
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            link_filter: LinkFilter::default(),
            default_country: DEFAULT_COUNTRY.to_string(),
            frame_base_url: None,
            timeout_seconds: FRAME_FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON for
    /// this structure.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Invalid configuration JSON")
    }
}
