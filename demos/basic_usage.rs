//! Basic logger usage example
//!
//! Demonstrates verbosity flags, subjects, JSON output and the
//! process-wide logger.
//!
//! Run with: cargo run --example basic_usage

use fslog::prelude::*;
use fslog::{debug, global, info, notice};
use std::fmt;

/// A remote as a sync tool would name it
struct Remote {
    name: String,
    root: String,
}

impl fmt::Display for Remote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.root)
    }
}

impl Subject for Remote {}

fn main() -> Result<()> {
    println!("=== fslog - Basic Usage Example ===\n");

    let remote = Remote {
        name: "drive".to_string(),
        root: "backup".to_string(),
    };

    // -v: show transfers, hide debug output
    println!("1. Text output at -v, with colors:");
    let logger = Logger::builder()
        .config(LogConfig::default().with_verbosity(1, false).with_log_colors(true))
        .appender(ConsoleAppender::stdout())
        .build()?;

    notice!(logger, Some(&remote), "Sync starting");
    info!(logger, Some(&"photos/cat.jpg"), "Copied (new)");
    debug!(logger, None, "Modification times differ");
    logger.error(Some(&log_dir_name(&remote, "")), format_args!("Failed to list"), &[]);

    println!("\n2. Raising the threshold to DEBUG:");
    let mut level = logger.log_level();
    level.set("DEBUG")?;
    logger.set_log_level(level);
    debug!(logger, None, "Modification times differ");

    println!("\n3. JSON output with fields:");
    let json = Logger::builder()
        .use_json_log(true)
        .appender(ConsoleAppender::stdout())
        .build()?;
    let size = 4096;
    notice!(json, Some(&remote), "Copied {} bytes", size; log_value("size", size), log_value("new", true));

    println!("\n4. Process-wide logger (stderr):");
    global::init(&LogConfig::default())?;
    global::notice(None, format_args!("Installed global logger"), &[]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
