//! Logging configuration
//!
//! Supplied by the host application (usually from its command line flags or
//! config file) and read when the logger is built.

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration
///
/// # Examples
///
/// ```
/// use fslog::{LogConfig, LogLevel};
///
/// // `-v --use-json-log`
/// let config = LogConfig::default()
///     .with_verbosity(1, false)
///     .with_json_log(true);
///
/// assert_eq!(config.log_level, LogLevel::Info);
/// assert!(config.use_json_log);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Least severe level shown
    pub log_level: LogLevel,
    /// Emit JSON records instead of text
    pub use_json_log: bool,
    /// Color the level column of text records
    pub enable_log_colors: bool,
    /// Append records to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Set the level from `-v` count and `-q`
    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8, quiet: bool) -> Self {
        self.log_level = LogLevel::from_verbosity(verbose, quiet);
        self
    }

    #[must_use]
    pub fn with_json_log(mut self, enabled: bool) -> Self {
        self.use_json_log = enabled;
        self
    }

    #[must_use]
    pub fn with_log_colors(mut self, enabled: bool) -> Self {
        self.enable_log_colors = enabled;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }
}
