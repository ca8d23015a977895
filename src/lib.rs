//! # fslog
//!
//! Leveled, structured logging for tools that sync and copy files between
//! local and remote storage.
//!
//! ## Features
//!
//! - **Syslog Levels**: Eight levels from `Emergency` to `Debug`, filtered
//!   against a single threshold
//! - **Subjects**: Records can be about a remote or an object; text output
//!   prefixes them, JSON output carries them as fields
//! - **Text or JSON**: Optional ANSI colors for text, one object per line for JSON
//! - **Fatal Escalation**: `Critical` records exit the process and
//!   `Emergency`/`Alert` records panic, after the record is written
//! - **Fallback Printing**: Logging before a sink exists still reaches stderr
//!
//! ## Example
//!
//! ```
//! use fslog::prelude::*;
//! use fslog::notice;
//!
//! let memory = MemoryAppender::new();
//! let logger = Logger::builder()
//!     .config(LogConfig::default().with_verbosity(1, false))
//!     .appender(memory.clone())
//!     .build()
//!     .unwrap();
//!
//! notice!(logger, Some(&"remote:backup"), "Sync started"; log_value("dry_run", false));
//! assert!(memory.lines()[0].ends_with("remote:backup: Sync started"));
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
    pub use crate::core::{
        log_dir_name, log_value, Appender, Dispatch, ExitHandler, FallbackPrinter, FieldValue,
        LogConfig, LogContext, LogEntry, LogLevel, LogValue, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, OutputFormat, Result, Subject, TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, FileAppender, MemoryAppender};
pub use core::{
    log_dir_name, log_value, Appender, Dispatch, DirSubject, ExitHandler, FallbackPrinter,
    FieldValue, LogConfig, LogContext, LogEntry, LogLevel, LogValue, Logger, LoggerBuilder,
    LoggerError, LoggerMetrics, OutputFormat, ProcessExit, Result, Sink, Subject, TimestampFormat,
    FATAL_EXIT_CODE,
};
