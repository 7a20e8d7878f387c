//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! into a shared buffer which the log panel renders.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept for the log panel.
///
pub const MAX_LOG_ENTRIES: usize = 500;

/// Log lines shared between the logger and the application state. Kept apart
/// from the state lock so logging while the state is held never blocks.
///
pub type LogEntries = Arc<Mutex<Vec<String>>>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Append an entry, dropping the oldest ones past the limit.
///
pub fn push_entry(entries: &LogEntries, entry: String) {
    if let Ok(mut guard) = entries.lock() {
        guard.push(entry);
        if guard.len() > MAX_LOG_ENTRIES {
            let overflow = guard.len() - MAX_LOG_ENTRIES;
            guard.drain(..overflow);
        }
    }
}

/// Custom logger that captures logs for the log panel
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }

    /// Build a logger that appends to the given entries.
    ///
    pub fn capturing(level: LevelFilter, entries: LogEntries) -> Self {
        let logger = CustomLogger::new(level);
        logger.set_log_callback(Box::new(move |entry| push_entry(&entries, entry)));
        logger
    }

    /// Install as the global logger. Fails if a logger is already set.
    ///
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_logger(Box::leak(Box::new(self)))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}
