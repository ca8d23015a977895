//! Console appender implementation

use crate::core::{Appender, Result};
use std::io::Write;

/// Standard stream a console appender writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Writes records to a standard stream, stderr unless told otherwise
pub struct ConsoleAppender {
    stream: ConsoleStream,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }

    pub fn stdout() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
        }
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        // Lock once so concurrent records never interleave within a line
        match self.stream {
            ConsoleStream::Stdout => writeln!(std::io::stdout().lock(), "{}", line)?,
            ConsoleStream::Stderr => writeln!(std::io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().flush()?,
            ConsoleStream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stderr() {
        assert_eq!(ConsoleAppender::default().stream(), ConsoleStream::Stderr);
        assert_eq!(ConsoleAppender::stdout().stream(), ConsoleStream::Stdout);
    }

    #[test]
    fn test_append_and_flush() -> Result<()> {
        let mut appender = ConsoleAppender::new();
        appender.append("console appender smoke test")?;
        appender.flush()?;
        assert_eq!(appender.name(), "console");
        Ok(())
    }
}
