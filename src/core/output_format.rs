//! Output format for log records
//!
//! - Text: fixed-width level column, optionally colored, no fields
//! - Json: one object per record carrying every field

use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;

/// Record keys of the JSON format; colliding field keys are prefixed
const RESERVED_KEYS: [&str; 3] = ["timestamp", "level", "message"];

/// Width of the level column in text output
pub const LEVEL_WIDTH: usize = 6;

/// Output format for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    ///
    /// Example: `2025-01-08 10:30:45 ERROR  : disk full`
    Text { colors: bool },

    /// JSON for machine processing
    ///
    /// Example: `{"bytes":1024,"level":"INFO","message":"Copied","timestamp":"2025-01-08T10:30:45+00:00"}`
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text { colors: false }
    }
}

impl OutputFormat {
    /// Pick the format the configuration flags ask for
    pub fn from_flags(use_json: bool, colors: bool) -> Self {
        if use_json {
            OutputFormat::Json
        } else {
            OutputFormat::Text { colors }
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }

    /// Timestamp format used when none is configured
    pub fn default_timestamp_format(&self) -> TimestampFormat {
        match self {
            OutputFormat::Text { .. } => TimestampFormat::DateTime,
            OutputFormat::Json => TimestampFormat::Rfc3339,
        }
    }

    /// Format a log record according to this output format
    pub fn format(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text { colors } => self.format_text(entry, timestamp_format, *colors),
            OutputFormat::Json => self.format_json(entry, timestamp_format),
        }
    }

    fn format_text(
        &self,
        entry: &LogEntry,
        timestamp_format: &TimestampFormat,
        colors: bool,
    ) -> String {
        let dispatch = entry.level.dispatch();
        let timestamp_str = timestamp_format.format(&entry.timestamp);

        if colors {
            format!(
                "{} \x1b[{}m{:<width$}\x1b[0m : {}",
                timestamp_str,
                dispatch.color_code().to_fg_str(),
                dispatch.to_str(),
                entry.message,
                width = LEVEL_WIDTH
            )
        } else {
            format!(
                "{} {:<width$} : {}",
                timestamp_str,
                dispatch.to_str(),
                entry.message,
                width = LEVEL_WIDTH
            )
        }
    }

    fn format_json(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        for (key, value) in entry.context.fields() {
            let key = if RESERVED_KEYS.contains(&key.as_str()) {
                format!("fields.{}", key)
            } else {
                key.clone()
            };
            json_obj.insert(key, value.to_json_value());
        }

        json_obj.insert(
            "timestamp".to_string(),
            timestamp_format.format_json(&entry.timestamp),
        );
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.dispatch().to_str().to_string()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }
}
