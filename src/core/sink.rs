//! Sink adapter: the configured destination of emitted records
//!
//! A sink owns one appender, the output format and timestamp format used to
//! render records for it, and the handler that ends the process for
//! `Critical` records. It has no threshold of its own; every record handed
//! to it is written.

use super::{
    appender::Appender,
    config::LogConfig,
    error::Result,
    log_entry::LogEntry,
    log_level::Dispatch,
    metrics::LoggerMetrics,
    output_format::OutputFormat,
    timestamp::TimestampFormat,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::Mutex;
use std::sync::Arc;

/// Exit status used after a `Critical` record
pub const FATAL_EXIT_CODE: i32 = 1;

/// Ends the process after a fatal record has been written
///
/// Tests substitute a handler that unwinds so the process survives.
pub trait ExitHandler: Send + Sync {
    fn exit(&self, code: i32) -> !;
}

/// Exits the process with `std::process::exit`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl ExitHandler for ProcessExit {
    fn exit(&self, code: i32) -> ! {
        std::process::exit(code)
    }
}

pub struct Sink {
    appender: Mutex<Box<dyn Appender>>,
    output_format: OutputFormat,
    timestamp_format: TimestampFormat,
    exit_handler: Arc<dyn ExitHandler>,
    metrics: Arc<LoggerMetrics>,
}

impl Sink {
    pub fn new(appender: Box<dyn Appender>, output_format: OutputFormat) -> Self {
        Self {
            appender: Mutex::new(appender),
            output_format,
            timestamp_format: output_format.default_timestamp_format(),
            exit_handler: Arc::new(ProcessExit),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Build the sink the configuration describes
    ///
    /// Writes to `log_file` when set, otherwise to stderr.
    pub fn from_config(config: &LogConfig) -> Result<Self> {
        let appender: Box<dyn Appender> = match config.log_file {
            Some(ref path) => Box::new(FileAppender::new(path)?),
            None => Box::new(ConsoleAppender::new()),
        };
        Ok(Self::new(
            appender,
            OutputFormat::from_flags(config.use_json_log, config.enable_log_colors),
        ))
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_exit_handler(mut self, handler: Arc<dyn ExitHandler>) -> Self {
        self.exit_handler = handler;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<LoggerMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Whether records carry their subject as fields instead of in the text
    pub fn is_structured(&self) -> bool {
        self.output_format.is_structured()
    }

    /// Write a record, then escalate if its severity demands it
    ///
    /// Does not return for `Critical` (the exit handler runs) or for
    /// `Emergency`/`Alert` (panics with the message). In both cases the
    /// record has been written and flushed first.
    pub fn dispatch(&self, entry: &LogEntry) {
        self.write(entry);

        match entry.level.dispatch() {
            Dispatch::Fatal => {
                self.flush_quietly();
                self.exit_handler.exit(FATAL_EXIT_CODE)
            }
            Dispatch::Panic => {
                self.flush_quietly();
                std::panic::panic_any(entry.message.clone())
            }
            Dispatch::Debug | Dispatch::Info | Dispatch::Warn | Dispatch::Error => {}
        }
    }

    fn write(&self, entry: &LogEntry) {
        let line = self.output_format.format(entry, &self.timestamp_format);
        let mut appender = self.appender.lock();

        match appender.append(&line) {
            Ok(()) => self.metrics.record_logged(),
            Err(e) => {
                self.metrics.record_dropped();
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }

    fn flush_quietly(&self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before escalating: {}", e);
        }
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("appender", &self.appender.lock().name())
            .field("output_format", &self.output_format)
            .field("timestamp_format", &self.timestamp_format)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use crate::core::{LogLevel, LoggerError};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    struct UnwindingExit;

    impl ExitHandler for UnwindingExit {
        fn exit(&self, code: i32) -> ! {
            std::panic::panic_any(code)
        }
    }

    struct BrokenAppender;

    impl Appender for BrokenAppender {
        fn append(&mut self, _line: &str) -> Result<()> {
            Err(LoggerError::writer("device gone"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    fn memory_sink(format: OutputFormat) -> (Sink, MemoryAppender) {
        let memory = MemoryAppender::new();
        let sink = Sink::new(Box::new(memory.clone()), format)
            .with_exit_handler(Arc::new(UnwindingExit));
        (sink, memory)
    }

    #[test]
    fn test_dispatch_writes_ordinary_levels() {
        let (sink, memory) = memory_sink(OutputFormat::default());
        for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Notice, LogLevel::Error] {
            sink.dispatch(&LogEntry::new(level, "ok"));
        }
        assert_eq!(memory.len(), 4);
    }

    #[test]
    fn test_critical_writes_then_exits() {
        let (sink, memory) = memory_sink(OutputFormat::default());

        let payload = catch_unwind(AssertUnwindSafe(|| {
            sink.dispatch(&LogEntry::new(LogLevel::Critical, "cannot continue"));
        }))
        .expect_err("critical must not return");

        assert_eq!(payload.downcast_ref::<i32>(), Some(&FATAL_EXIT_CODE));
        assert_eq!(memory.len(), 1);
        assert!(memory.lines()[0].ends_with("FATAL  : cannot continue"));
    }

    #[test]
    fn test_alert_writes_then_panics() {
        let (sink, memory) = memory_sink(OutputFormat::Json);

        let payload = catch_unwind(AssertUnwindSafe(|| {
            sink.dispatch(&LogEntry::new(LogLevel::Alert, "corrupted index"));
        }))
        .expect_err("alert must not return");

        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("corrupted index")
        );
        let parsed: serde_json::Value = serde_json::from_str(&memory.lines()[0]).unwrap();
        assert_eq!(parsed["level"], "PANIC");
    }

    #[test]
    fn test_write_failure_is_counted() {
        let metrics = Arc::new(LoggerMetrics::new());
        let sink = Sink::new(Box::new(BrokenAppender), OutputFormat::default())
            .with_metrics(Arc::clone(&metrics));

        sink.dispatch(&LogEntry::new(LogLevel::Error, "lost"));

        assert_eq!(metrics.dropped_count(), 1);
        assert_eq!(metrics.total_logged(), 0);
    }

    #[test]
    fn test_from_config_picks_format() -> Result<()> {
        let json = Sink::from_config(&LogConfig::default().with_json_log(true))?;
        assert!(json.is_structured());
        assert_eq!(json.timestamp_format(), &TimestampFormat::Rfc3339);

        let text = Sink::from_config(&LogConfig::default().with_log_colors(true))?;
        assert_eq!(text.output_format(), OutputFormat::Text { colors: true });
        assert_eq!(text.timestamp_format(), &TimestampFormat::DateTime);
        Ok(())
    }
}
