//! Appender implementations

pub mod console;
pub mod file;
pub mod memory;

pub use console::{ConsoleAppender, ConsoleStream};
pub use file::FileAppender;
pub use memory::MemoryAppender;

// Re-export the trait next to its implementations
pub use crate::core::Appender;
