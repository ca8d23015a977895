//! Logging macros for ergonomic log message formatting.
//!
//! Every macro takes the logger, an optional subject, a format string with
//! its arguments and, after a `;`, any number of field annotations.
//!
//! # Examples
//!
//! ```
//! use fslog::prelude::*;
//! use fslog::{info, notice};
//!
//! let logger = Logger::builder()
//!     .log_level(LogLevel::Info)
//!     .appender(MemoryAppender::new())
//!     .build()
//!     .unwrap();
//!
//! // No subject
//! notice!(logger, None, "Starting sync");
//!
//! // About an object, with a field for JSON output
//! let bytes = 4096;
//! info!(logger, Some(&"docs/a.txt"), "Copied {} bytes", bytes; log_value("bytes", bytes));
//! ```

/// Log at a given level when it passes the threshold.
///
/// # Examples
///
/// ```
/// # use fslog::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build().unwrap();
/// use fslog::log;
/// log!(logger, LogLevel::Warning, None, "Simple message");
/// log!(logger, LogLevel::Error, Some(&"remote:"), "Error code: {}", 500; log_value("code", 500));
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $subject:expr, $fmt:literal $(, $arg:expr)* $(; $($value:expr),+)?) => {
        $logger.log($level, $subject, format_args!($fmt $(, $arg)*), &[$($($value),+)?])
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use fslog::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build().unwrap();
/// use fslog::error;
/// error!(logger, Some(&"photos/cat.jpg"), "Failed to copy: {}", "permission denied");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $subject:expr, $fmt:literal $(, $arg:expr)* $(; $($value:expr),+)?) => {
        $crate::log!($logger, $crate::LogLevel::Error, $subject, $fmt $(, $arg)* $(; $($value),+)?)
    };
}

/// Log a notice-level message, the normal output level.
///
/// # Examples
///
/// ```
/// # use fslog::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build().unwrap();
/// use fslog::notice;
/// notice!(logger, None, "{} files to transfer", 12);
/// ```
#[macro_export]
macro_rules! notice {
    ($logger:expr, $subject:expr, $fmt:literal $(, $arg:expr)* $(; $($value:expr),+)?) => {
        $crate::log!($logger, $crate::LogLevel::Notice, $subject, $fmt $(, $arg)* $(; $($value),+)?)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use fslog::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build().unwrap();
/// use fslog::info;
/// info!(logger, Some(&"music/a.flac"), "Deleted"; log_value("dry_run", false));
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $subject:expr, $fmt:literal $(, $arg:expr)* $(; $($value:expr),+)?) => {
        $crate::log!($logger, $crate::LogLevel::Info, $subject, $fmt $(, $arg)* $(; $($value),+)?)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use fslog::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build().unwrap();
/// use fslog::debug;
/// debug!(logger, None, "Modification times differ by {}ms", 12);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $subject:expr, $fmt:literal $(, $arg:expr)* $(; $($value:expr),+)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $subject, $fmt $(, $arg)* $(; $($value),+)?)
    };
}
