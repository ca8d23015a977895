//! Level-filtered emitters

use super::{
    appender::Appender,
    config::LogConfig,
    error::Result,
    fallback::FallbackPrinter,
    log_context::LogValue,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    output_format::OutputFormat,
    sink::{ExitHandler, Sink},
    subject::Subject,
    timestamp::TimestampFormat,
};
use parking_lot::RwLock;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Logging handle shared by everything that reports on remotes and objects
///
/// A logger without a sink still works: records go to the fallback printer.
///
/// # Example
///
/// ```
/// use fslog::prelude::*;
///
/// let memory = MemoryAppender::new();
/// let logger = Logger::builder()
///     .log_level(LogLevel::Info)
///     .appender(memory.clone())
///     .build()
///     .unwrap();
///
/// let size = 1024;
/// logger.info(Some(&"backup/db.sql"), format_args!("Copied"), &[log_value("bytes", size)]);
/// logger.debug(None, format_args!("hidden"), &[]);
///
/// assert_eq!(memory.len(), 1);
/// assert!(memory.lines()[0].ends_with("INFO   : backup/db.sql: Copied"));
/// ```
pub struct Logger {
    threshold: RwLock<LogLevel>,
    sink: Option<Sink>,
    fallback: FallbackPrinter,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Build a logger writing where `config` says
    pub fn new(config: &LogConfig) -> Result<Self> {
        Self::builder().config(config.clone()).build()
    }

    /// A logger with no sink, printing through the fallback printer
    #[must_use]
    pub fn fallback_only(config: &LogConfig) -> Self {
        Self {
            threshold: RwLock::new(config.log_level),
            sink: None,
            fallback: FallbackPrinter::new(),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn set_log_level(&self, level: LogLevel) {
        *self.threshold.write() = level;
    }

    pub fn log_level(&self) -> LogLevel {
        *self.threshold.read()
    }

    /// Whether a record at `level` passes the threshold
    ///
    /// The threshold is the least severe level shown, so a record passes
    /// when its rank is at most the threshold's rank.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        *self.threshold.read() >= level
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    pub fn sink(&self) -> Option<&Sink> {
        self.sink.as_ref()
    }

    /// Build a record and route it, bypassing the threshold
    ///
    /// Text records get the subject prepended as `"<subject>: "`; JSON
    /// records carry it as the `object` and `objectType` fields instead.
    #[track_caller]
    pub fn emit(
        &self,
        level: LogLevel,
        subject: Option<&dyn Subject>,
        args: fmt::Arguments<'_>,
        values: &[LogValue],
    ) {
        let location = Location::caller();
        let text = fmt::format(args);

        match self.sink {
            Some(ref sink) => {
                let message = match subject {
                    Some(s) if !sink.is_structured() => format!("{}: {}", s, text),
                    _ => text,
                };
                let mut entry = LogEntry::new(level, message).with_location(location);
                if let Some(s) = subject {
                    entry = entry.with_subject(s);
                }
                sink.dispatch(&entry.with_values(values));
            }
            None => {
                let message = match subject {
                    Some(s) => format!("{}: {}", s, text),
                    None => text,
                };
                self.metrics.record_fallback();
                self.fallback
                    .print(&LogEntry::new(level, message).with_location(location));
            }
        }
    }

    /// Emit when `level` passes the threshold
    #[track_caller]
    pub fn log(
        &self,
        level: LogLevel,
        subject: Option<&dyn Subject>,
        args: fmt::Arguments<'_>,
        values: &[LogValue],
    ) {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }
        self.emit(level, subject, args, values);
    }

    /// Errors are shown unless the threshold is above `Error`
    #[track_caller]
    #[inline]
    pub fn error(&self, subject: Option<&dyn Subject>, args: fmt::Arguments<'_>, values: &[LogValue]) {
        self.log(LogLevel::Error, subject, args, values);
    }

    /// Normal output, suppressed by `-q`
    #[track_caller]
    #[inline]
    pub fn notice(&self, subject: Option<&dyn Subject>, args: fmt::Arguments<'_>, values: &[LogValue]) {
        self.log(LogLevel::Notice, subject, args, values);
    }

    /// Transfers and deletions, shown with `-v`
    #[track_caller]
    #[inline]
    pub fn info(&self, subject: Option<&dyn Subject>, args: fmt::Arguments<'_>, values: &[LogValue]) {
        self.log(LogLevel::Info, subject, args, values);
    }

    /// Debugging output, shown with `-vv`
    #[track_caller]
    #[inline]
    pub fn debug(&self, subject: Option<&dyn Subject>, args: fmt::Arguments<'_>, values: &[LogValue]) {
        self.log(LogLevel::Debug, subject, args, values);
    }

    pub fn flush(&self) -> Result<()> {
        match self.sink {
            Some(ref sink) => sink.flush(),
            None => Ok(()),
        }
    }

    /// Get the logger metrics for detailed observability
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.log_level())
            .field("sink", &self.sink)
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} dropped logs (drop rate: {:.2}%)",
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use fslog::prelude::*;
///
/// let logger = Logger::builder()
///     .log_level(LogLevel::Debug)
///     .use_json_log(true)
///     .appender(ConsoleAppender::stdout())
///     .build()
///     .unwrap();
/// assert!(logger.sink().unwrap().is_structured());
/// ```
pub struct LoggerBuilder {
    config: LogConfig,
    appender: Option<Box<dyn Appender>>,
    timestamp_format: Option<TimestampFormat>,
    exit_handler: Option<Arc<dyn ExitHandler>>,
    fallback: Option<FallbackPrinter>,
    without_sink: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
            appender: None,
            timestamp_format: None,
            exit_handler: None,
            fallback: None,
            without_sink: false,
        }
    }

    /// Start from an existing configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.log_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn use_json_log(mut self, enabled: bool) -> Self {
        self.config.use_json_log = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn enable_log_colors(mut self, enabled: bool) -> Self {
        self.config.enable_log_colors = enabled;
        self
    }

    /// Write records here instead of the configured console or file
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Override the output format's default timestamp format
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Replace process exit after `Critical` records
    #[must_use = "builder methods return a new value"]
    pub fn exit_handler(mut self, handler: Arc<dyn ExitHandler>) -> Self {
        self.exit_handler = Some(handler);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn fallback(mut self, printer: FallbackPrinter) -> Self {
        self.fallback = Some(printer);
        self
    }

    /// Build without a sink so every record takes the fallback path
    #[must_use = "builder methods return a new value"]
    pub fn without_sink(mut self) -> Self {
        self.without_sink = true;
        self
    }

    /// Build the Logger
    ///
    /// Fails only when the configured log file cannot be opened.
    pub fn build(self) -> Result<Logger> {
        let metrics = Arc::new(LoggerMetrics::new());

        let sink = if self.without_sink {
            None
        } else {
            let mut sink = match self.appender {
                Some(appender) => Sink::new(
                    appender,
                    OutputFormat::from_flags(self.config.use_json_log, self.config.enable_log_colors),
                ),
                None => Sink::from_config(&self.config)?,
            };
            if let Some(format) = self.timestamp_format {
                sink = sink.with_timestamp_format(format);
            }
            if let Some(handler) = self.exit_handler {
                sink = sink.with_exit_handler(handler);
            }
            Some(sink.with_metrics(Arc::clone(&metrics)))
        };

        Ok(Logger {
            threshold: RwLock::new(self.config.log_level),
            sink,
            fallback: self.fallback.unwrap_or_default(),
            metrics,
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use crate::core::log_value;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    struct UnwindingExit;

    impl ExitHandler for UnwindingExit {
        fn exit(&self, code: i32) -> ! {
            std::panic::panic_any(code)
        }
    }

    fn memory_logger(level: LogLevel, json: bool) -> (Logger, MemoryAppender) {
        let memory = MemoryAppender::new();
        let logger = Logger::builder()
            .log_level(level)
            .use_json_log(json)
            .appender(memory.clone())
            .exit_handler(Arc::new(UnwindingExit))
            .build()
            .expect("memory logger");
        (logger, memory)
    }

    #[test]
    fn test_threshold_notice() {
        let (logger, memory) = memory_logger(LogLevel::Notice, false);

        logger.info(None, format_args!("info"), &[]);
        assert!(memory.is_empty());

        logger.notice(None, format_args!("notice"), &[]);
        logger.error(None, format_args!("error"), &[]);
        assert_eq!(memory.len(), 2);
        assert_eq!(logger.metrics().filtered_count(), 1);
        assert_eq!(logger.metrics().total_logged(), 2);
    }

    #[test]
    fn test_raising_threshold_increases_verbosity() {
        let (logger, memory) = memory_logger(LogLevel::Notice, false);

        logger.debug(None, format_args!("before"), &[]);
        logger.set_log_level(LogLevel::Debug);
        logger.debug(None, format_args!("after"), &[]);

        assert_eq!(memory.len(), 1);
        assert!(memory.lines()[0].ends_with("DEBUG  : after"));
        assert_eq!(logger.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_is_enabled_direction() {
        let (logger, _memory) = memory_logger(LogLevel::Warning, false);
        assert!(logger.is_enabled(LogLevel::Emergency));
        assert!(logger.is_enabled(LogLevel::Error));
        assert!(logger.is_enabled(LogLevel::Warning));
        assert!(!logger.is_enabled(LogLevel::Notice));
        assert!(!logger.is_enabled(LogLevel::Debug));
    }

    #[test]
    fn test_emit_ignores_threshold() {
        let (logger, memory) = memory_logger(LogLevel::Error, false);
        logger.emit(LogLevel::Debug, None, format_args!("forced"), &[]);
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_text_prepends_subject() {
        let (logger, memory) = memory_logger(LogLevel::Debug, false);
        let size = 10;
        logger.info(
            Some(&"music/a.flac"),
            format_args!("Copied (new){}", log_value("size", size)),
            &[log_value("size", size)],
        );
        assert!(memory.lines()[0].ends_with("INFO   : music/a.flac: Copied (new)"));
        assert!(!memory.contents().contains("size"));
    }

    #[test]
    fn test_json_carries_subject_as_fields() {
        let (logger, memory) = memory_logger(LogLevel::Debug, true);
        logger.info(
            Some(&"music/a.flac"),
            format_args!("Copied (new)"),
            &[log_value("size", 10), log_value("size", 11)],
        );

        let parsed: serde_json::Value = serde_json::from_str(&memory.lines()[0]).unwrap();
        assert_eq!(parsed["message"], "Copied (new)");
        assert_eq!(parsed["object"], "music/a.flac");
        assert_eq!(parsed["objectType"], "str");
        assert_eq!(parsed["size"], 11);
    }

    #[test]
    fn test_fallback_without_sink() {
        let memory = MemoryAppender::new();
        let logger = Logger::builder()
            .log_level(LogLevel::Debug)
            .without_sink()
            .fallback(FallbackPrinter::with_appender(Box::new(memory.clone())).with_timestamp(false))
            .build()
            .expect("fallback logger");

        logger.notice(Some(&"photos"), format_args!("made directory"), &[log_value("n", 1)]);
        logger.emit(LogLevel::Critical, None, format_args!("still returns"), &[]);

        assert!(!logger.has_sink());
        assert_eq!(
            memory.lines(),
            vec!["NOTICE: photos: made directory", "CRITICAL: still returns"]
        );
        assert_eq!(logger.metrics().fallback_count(), 2);
    }

    #[test]
    fn test_critical_logs_then_exits() {
        let (logger, memory) = memory_logger(LogLevel::Notice, false);

        let result = catch_unwind(AssertUnwindSafe(|| {
            logger.log(LogLevel::Critical, None, format_args!("out of space"), &[]);
        }));

        assert!(result.is_err());
        assert_eq!(memory.len(), 1);
        assert!(memory.lines()[0].ends_with("FATAL  : out of space"));
    }

    #[test]
    fn test_emergency_logs_then_panics() {
        let (logger, memory) = memory_logger(LogLevel::Notice, false);

        let result = catch_unwind(AssertUnwindSafe(|| {
            logger.log(LogLevel::Emergency, None, format_args!("state lost"), &[]);
        }));

        let payload = result.expect_err("emergency must not return");
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("state lost"));
        assert!(memory.lines()[0].ends_with("PANIC  : state lost"));
    }

    #[test]
    fn test_builder_bad_log_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = LogConfig::default().with_log_file(dir.path().join("no/such/dir.log"));
        assert!(Logger::new(&config).is_err());
    }
}
