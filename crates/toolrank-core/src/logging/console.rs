//! Console logger implementation

use super::traits::{LogLevel, Logger};

/// A logger that outputs to the console
///
/// Info goes to stdout, everything else to stderr.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger with the default prefix at info level
    pub fn new() -> Self {
        Self {
            prefix: "[ToolRank]".to_string(),
            min_level: LogLevel::Info,
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::new()
        }
    }

    /// Set the minimum level written
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        match level {
            LogLevel::Info => println!("{} {}: {}", self.prefix, level, message),
            _ => eprintln!("{} {}: {}", self.prefix, level, message),
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logger_creation() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.prefix, "[ToolRank]");
        assert!(!logger.enabled(LogLevel::Debug));

        let custom = ConsoleLogger::with_prefix("[Host]").with_min_level(LogLevel::Trace);
        assert_eq!(custom.prefix, "[Host]");
        assert!(custom.enabled(LogLevel::Trace));
    }

    #[test]
    fn test_console_logger_logs() {
        // This test just verifies the logger doesn't panic
        let logger = ConsoleLogger::new();
        logger.debug("debug message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
    }
}
