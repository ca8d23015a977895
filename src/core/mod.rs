//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod fallback;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod sink;
pub mod subject;
pub mod timestamp;

pub use appender::Appender;
pub use config::LogConfig;
pub use error::{LoggerError, Result};
pub use fallback::FallbackPrinter;
pub use log_context::{log_value, FieldValue, LogContext, LogValue};
pub use log_entry::LogEntry;
pub use log_level::{Dispatch, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use sink::{ExitHandler, ProcessExit, Sink, FATAL_EXIT_CODE};
pub use subject::{log_dir_name, DirSubject, Subject};
pub use timestamp::TimestampFormat;
