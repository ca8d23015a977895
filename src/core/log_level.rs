//! Severity levels and the severity-to-action table
//!
//! Levels are the syslog severities, ranked from most severe (`Emergency`,
//! rank 0) to least severe (`Debug`, rank 7). A configured threshold is the
//! *maximum* rank to show, so raising it makes logging more verbose.

use super::error::{LoggerError, Result};
use colored::Color;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum LogLevel {
    /// System is unusable
    Emergency = 0,
    /// Action must be taken immediately
    Alert = 1,
    /// Critical conditions
    Critical = 2,
    /// Error conditions, always shown
    Error = 3,
    /// Warning conditions
    Warning = 4,
    /// Normal but significant, suppressed by `-q`
    #[default]
    Notice = 5,
    /// Transfers and deletions, needs `-v`
    Info = 6,
    /// Debugging output, needs `-vv`
    Debug = 7,
}

impl LogLevel {
    /// Every level, most severe first
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Emergency,
        LogLevel::Alert,
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub const fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Emergency => "EMERGENCY",
            LogLevel::Alert => "ALERT",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Notice => "NOTICE",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Position in the severity order, 0 being the most severe
    #[inline]
    pub const fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(usize::from(rank)).copied()
    }

    /// Name a raw level value, producing `LogLevel(<n>)` for values outside the set
    ///
    /// # Examples
    ///
    /// ```
    /// use fslog::LogLevel;
    ///
    /// assert_eq!(LogLevel::name_of(3), "ERROR");
    /// assert_eq!(LogLevel::name_of(42), "LogLevel(42)");
    /// ```
    pub fn name_of(raw: u8) -> Cow<'static, str> {
        match Self::from_rank(raw) {
            Some(level) => Cow::Borrowed(level.to_str()),
            None => Cow::Owned(format!("LogLevel({})", raw)),
        }
    }

    /// Map command line verbosity to a threshold
    ///
    /// `-q` shows errors only, the default shows notices, `-v` adds info and
    /// `-vv` adds debug output. Quiet wins over any number of `-v`.
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return LogLevel::Error;
        }
        match verbose {
            0 => LogLevel::Notice,
            1 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    /// Parse `s` into `self`, leaving it untouched on failure
    pub fn set(&mut self, s: &str) -> Result<()> {
        *self = s.parse()?;
        Ok(())
    }

    /// Backend action this severity is routed to
    pub const fn dispatch(&self) -> Dispatch {
        match self {
            LogLevel::Debug => Dispatch::Debug,
            LogLevel::Info => Dispatch::Info,
            LogLevel::Notice | LogLevel::Warning => Dispatch::Warn,
            LogLevel::Error => Dispatch::Error,
            LogLevel::Critical => Dispatch::Fatal,
            LogLevel::Emergency | LogLevel::Alert => Dispatch::Panic,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width and alignment flags apply to the name
        f.pad(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| !s.is_empty() && level.to_str() == s)
            .ok_or_else(|| LoggerError::unknown_level(s))
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggerError;

    fn try_from(raw: u8) -> Result<Self> {
        Self::from_rank(raw).ok_or_else(|| LoggerError::unknown_level(Self::name_of(raw)))
    }
}

/// What the sink does with a record of a given severity
///
/// `Fatal` and `Panic` are not ordinary log lines: after the record is
/// written, `Fatal` exits the process and `Panic` unwinds the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl Dispatch {
    /// Uppercase bucket name shown in text and JSON output
    pub const fn to_str(&self) -> &'static str {
        match self {
            Dispatch::Debug => "DEBUG",
            Dispatch::Info => "INFO",
            Dispatch::Warn => "WARNING",
            Dispatch::Error => "ERROR",
            Dispatch::Fatal => "FATAL",
            Dispatch::Panic => "PANIC",
        }
    }

    pub fn color_code(&self) -> Color {
        match self {
            Dispatch::Debug => Color::Blue,
            Dispatch::Warn => Color::Yellow,
            Dispatch::Error | Dispatch::Fatal | Dispatch::Panic => Color::Red,
            Dispatch::Info => Color::Cyan,
        }
    }

    /// Whether writing the record ends the caller's control flow
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Dispatch::Fatal | Dispatch::Panic)
    }
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}
