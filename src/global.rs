//! Process-wide logger
//!
//! Libraries should take a `&Logger`; this module is for the binary's
//! outermost layer, which installs one logger at startup and lets code that
//! has no handle reach it.

use crate::core::{LogConfig, LogLevel, LogValue, Logger, LoggerError, Result, Subject};
use std::fmt;
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();
static UNINITIALIZED: OnceLock<Logger> = OnceLock::new();

/// Build the process-wide logger from `config` and install it
///
/// Fails with `AlreadyInitialized` if a logger is already installed, or
/// with an IO error if the configured log file cannot be opened.
pub fn init(config: &LogConfig) -> Result<&'static Logger> {
    install(Logger::new(config)?)
}

/// Install an already built logger as the process-wide one
pub fn install(logger: Logger) -> Result<&'static Logger> {
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    Ok(logger_ref())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// The installed logger, or a sinkless logger with default settings
pub fn logger() -> &'static Logger {
    logger_ref()
}

fn logger_ref() -> &'static Logger {
    match GLOBAL_LOGGER.get() {
        Some(logger) => logger,
        None => UNINITIALIZED.get_or_init(|| Logger::fallback_only(&LogConfig::default())),
    }
}

#[track_caller]
pub fn log(level: LogLevel, subject: Option<&dyn Subject>, args: fmt::Arguments<'_>, values: &[LogValue]) {
    logger().log(level, subject, args, values);
}

#[track_caller]
pub fn error(subject: Option<&dyn Subject>, args: fmt::Arguments<'_>, values: &[LogValue]) {
    logger().error(subject, args, values);
}

#[track_caller]
pub fn notice(subject: Option<&dyn Subject>, args: fmt::Arguments<'_>, values: &[LogValue]) {
    logger().notice(subject, args, values);
}

#[track_caller]
pub fn info(subject: Option<&dyn Subject>, args: fmt::Arguments<'_>, values: &[LogValue]) {
    logger().info(subject, args, values);
}

#[track_caller]
pub fn debug(subject: Option<&dyn Subject>, args: fmt::Arguments<'_>, values: &[LogValue]) {
    logger().debug(subject, args, values);
}
