//! Appender trait for log output destinations

use super::error::Result;

/// Line-oriented write target
///
/// `line` is a fully formatted record without the trailing newline.
pub trait Appender: Send + Sync {
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
