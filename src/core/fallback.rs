//! Fallback printer used when no sink has been built
//!
//! Writes `"<LEVEL>: <message>"` lines straight to the diagnostic stream
//! with the same prefix a basic process logger uses: local date and time,
//! optionally followed by the caller's `file:line`. No filtering, no color,
//! no fields.

use super::{appender::Appender, log_entry::LogEntry, timestamp::TimestampFormat};
use crate::appenders::ConsoleAppender;
use parking_lot::Mutex;

/// Date and time prefix of fallback lines
pub const FALLBACK_TIMESTAMP: &str = "%Y/%m/%d %H:%M:%S";

pub struct FallbackPrinter {
    appender: Mutex<Box<dyn Appender>>,
    timestamp_format: Option<TimestampFormat>,
    source_location: bool,
}

impl FallbackPrinter {
    /// Print to stderr with a date and time prefix
    pub fn new() -> Self {
        Self::with_appender(Box::new(ConsoleAppender::new()))
    }

    pub fn with_appender(appender: Box<dyn Appender>) -> Self {
        Self {
            appender: Mutex::new(appender),
            timestamp_format: Some(TimestampFormat::Custom(FALLBACK_TIMESTAMP.to_string())),
            source_location: false,
        }
    }

    /// Enable or disable the date and time prefix
    #[must_use]
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.timestamp_format =
            enabled.then(|| TimestampFormat::Custom(FALLBACK_TIMESTAMP.to_string()));
        self
    }

    /// Prefix lines with the `file:line` of the logging call
    #[must_use]
    pub fn with_source_location(mut self, enabled: bool) -> Self {
        self.source_location = enabled;
        self
    }

    pub fn format(&self, entry: &LogEntry) -> String {
        let mut line = String::new();

        if let Some(ref format) = self.timestamp_format {
            line.push_str(&format.format(&entry.timestamp));
            line.push(' ');
        }
        if self.source_location {
            if let Some(location) = entry.short_location() {
                line.push_str(&location);
                line.push_str(": ");
            }
        }

        line.push_str(&format!("{:<6}: {}", entry.level, entry.message));
        line
    }

    /// Best-effort write; failures are swallowed since there is nowhere
    /// left to report them
    pub fn print(&self, entry: &LogEntry) {
        let line = self.format(entry);
        let mut appender = self.appender.lock();
        let _ = appender.append(&line);
        let _ = appender.flush();
    }
}

impl Default for FallbackPrinter {
    fn default() -> Self {
        Self::new()
    }
}
