//! Log record structure

use super::log_context::{FieldValue, LogContext, LogValue};
use super::log_level::LogLevel;
use super::subject::{Subject, OBJECT_FIELD, OBJECT_TYPE_FIELD};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::panic::Location;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub file: Option<String>,
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "LogContext::is_empty")]
    pub context: LogContext,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
            file: None,
            line: None,
            context: LogContext::new(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_location(mut self, location: &Location<'_>) -> Self {
        self.file = Some(location.file().to_string());
        self.line = Some(location.line());
        self
    }

    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }

    /// Record the subject as the `object` and `objectType` fields
    pub fn with_subject(mut self, subject: &dyn Subject) -> Self {
        self.context.add_field(OBJECT_FIELD, subject.to_string());
        self.context.add_field(OBJECT_TYPE_FIELD, subject.type_name());
        self
    }

    pub fn with_values(mut self, values: &[LogValue]) -> Self {
        self.context.merge_values(values);
        self
    }

    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.context.get(key)
    }

    /// `file:line` of the call site, file name without directories
    pub fn short_location(&self) -> Option<String> {
        let file = self.file.as_deref()?;
        let line = self.line?;
        let short = file.rsplit(['/', '\\']).next().unwrap_or(file);
        Some(format!("{}:{}", short, line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_context::log_value;

    #[test]
    fn test_subject_fields_then_values() {
        let entry = LogEntry::new(LogLevel::Info, "copied")
            .with_subject(&"photos/cat.jpg")
            .with_values(&[log_value("bytes", 1024), log_value("object", "override")]);

        assert_eq!(entry.field("bytes"), Some(&FieldValue::Int(1024)));
        assert_eq!(entry.field("object"), Some(&FieldValue::from("override")));
        assert_eq!(entry.field("objectType"), Some(&FieldValue::from("str")));
    }

    #[test]
    fn test_location_capture() {
        let entry = LogEntry::new(LogLevel::Debug, "here").with_location(Location::caller());
        assert!(entry.file.is_some());
        assert!(entry.line.is_some());
        let short = entry.short_location().expect("location recorded");
        assert!(!short.contains('/'));
        assert!(short.contains(".rs:"));
    }

    #[test]
    fn test_short_location_absent() {
        let entry = LogEntry::new(LogLevel::Debug, "nowhere");
        assert_eq!(entry.short_location(), None);
    }

    #[test]
    fn test_serialize_skips_empty_context() {
        let entry = LogEntry::new(LogLevel::Error, "disk full");
        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["level"], "ERROR");
        assert!(json.get("context").is_none());
    }
}
