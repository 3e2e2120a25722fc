//! Logger trait definition

/// Log levels, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Parse a level name, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO "),
            LogLevel::Warn => write!(f, "WARN "),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Logger abstraction for runtime-agnostic logging
///
/// Hosts plug their own sink in (an editor output channel, a test capture).
/// Implementations:
/// - `NoOpLogger`: Silent logger, the service default
/// - `ConsoleLogger`: Logs to stdout/stderr
/// - `FileLogger`: Appends to a debug log file
/// - `MemoryLogger`: Keeps lines in memory for assertions
pub trait Logger: Send + Sync {
    /// Write a message at the given level
    fn log(&self, level: LogLevel, message: &str);

    /// Whether messages at `level` would be written
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Extension trait for logging with format arguments
///
/// Formatting is skipped entirely when the level is disabled.
pub trait LoggerExt: Logger {
    fn log_fmt(&self, level: LogLevel, args: std::fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.log(level, &args.to_string());
        }
    }
}

impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::log_fmt(&*$logger, $crate::logging::LogLevel::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::log_fmt(&*$logger, $crate::logging::LogLevel::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::log_fmt(&*$logger, $crate::logging::LogLevel::Warn, format_args!($($arg)*))
    };
}
