//! Logging abstractions for runtime-agnostic logging

mod traits;
mod noop;
mod console;
mod memory;
pub mod file_logger;

pub use traits::{Logger, LoggerExt, LogLevel};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::MemoryLogger;
pub use file_logger::{FileLogger, log_file_path, clear_log};
