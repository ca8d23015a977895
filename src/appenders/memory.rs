//! In-memory appender
//!
//! Keeps every line it receives. Clones share the same buffer, so one clone
//! can be handed to a logger while another inspects what was written.

use crate::core::{Appender, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Everything written so far, newline-terminated
    pub fn contents(&self) -> String {
        self.lines
            .lock()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() -> Result<()> {
        let reader = MemoryAppender::new();
        let mut writer = reader.clone();

        writer.append("one")?;
        writer.append("two")?;

        assert_eq!(reader.lines(), vec!["one", "two"]);
        assert_eq!(reader.contents(), "one\ntwo\n");
        assert_eq!(reader.len(), 2);

        reader.clear();
        assert!(writer.is_empty());
        Ok(())
    }
}
