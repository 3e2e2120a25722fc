//! No-op logger implementation

use super::traits::{LogLevel, Logger};

/// A logger that does nothing
///
/// Used by `ToolRelevanceService::new()` when the host does not supply a sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}
