//! File-based debug logger
//!
//! Writes to a shared log file for troubleshooting when the host swallows
//! stdout/stderr (e.g. an editor extension host). Disabled unless
//! `TOOLRANK_DEBUG` is set to `1` or `true`.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::SystemTime;

use super::traits::{LogLevel, Logger};

const ENV_DEBUG: &str = "TOOLRANK_DEBUG";
const ENV_LOG_LEVEL: &str = "TOOLRANK_LOG_LEVEL";

/// Shared file handle and gating state
struct FileLogState {
    file: Option<File>,
    min_level: LogLevel,
    enabled: bool,
}

impl FileLogState {
    fn from_env() -> Self {
        let enabled = std::env::var(ENV_DEBUG)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let min_level = std::env::var(ENV_LOG_LEVEL)
            .ok()
            .and_then(|v| LogLevel::parse(&v))
            .unwrap_or(LogLevel::Debug);

        // Only touch the filesystem when logging is actually on
        let file = if enabled { open_log_file() } else { None };

        Self { file, min_level, enabled }
    }

    fn accepts(&self, level: LogLevel) -> bool {
        self.enabled && level >= self.min_level
    }

    fn write(&mut self, level: LogLevel, target: &str, message: &str) {
        if !self.accepts(level) {
            return;
        }

        if let Some(ref mut file) = self.file {
            let _ = writeln!(file, "[{}] [{}] [{}] {}", timestamp(), level, target, message);
            let _ = file.flush();
        }
    }
}

fn open_log_file() -> Option<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path())
        .ok()
}

/// `HH:MM:SS.mmm` of the current UTC time
fn timestamp() -> String {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs();
            format!(
                "{:02}:{:02}:{:02}.{:03}",
                (secs % 86400) / 3600,
                (secs % 3600) / 60,
                secs % 60,
                d.subsec_millis()
            )
        })
        .unwrap_or_else(|_| "??:??:??.???".to_string())
}

static STATE: OnceLock<Mutex<FileLogState>> = OnceLock::new();

fn state() -> &'static Mutex<FileLogState> {
    STATE.get_or_init(|| Mutex::new(FileLogState::from_env()))
}

/// Path of the debug log file
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("toolrank-debug.log")
}

/// Truncate the log file and reopen it
pub fn clear_log() {
    let path = log_file_path();
    if let Ok(file) = File::create(&path) {
        drop(file);
    }
    if let Ok(mut state) = state().lock() {
        if state.enabled {
            state.file = open_log_file();
        }
    }
}

/// Logger that appends to the shared debug file
///
/// Every instance writes through the same handle; `target` tags the lines.
#[derive(Debug, Clone)]
pub struct FileLogger {
    target: String,
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::new("toolrank")
    }
}

impl FileLogger {
    pub fn new(target: impl Into<String>) -> Self {
        Self { target: target.into() }
    }
}

impl Logger for FileLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if let Ok(mut state) = state().lock() {
            state.write(level, &self.target, message);
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        state().lock().map(|s| s.accepts(level)).unwrap_or(false)
    }
}
