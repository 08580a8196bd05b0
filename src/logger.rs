//! Custom logging module.
//!
//! This module provides a logger implementation that captures log entries
//! into a bounded buffer shared with the application state for display in
//! the UI.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of log entries kept for display.
///
pub const LOG_CAPACITY: usize = 200;

/// Shared buffer of formatted log entries, oldest first.
///
pub type LogBuffer = Arc<Mutex<VecDeque<String>>>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Return a copy of the buffered entries.
///
pub fn snapshot(buffer: &LogBuffer) -> Vec<String> {
    match buffer.lock() {
        Ok(entries) => entries.iter().cloned().collect(),
        Err(_) => vec![],
    }
}

/// Logger that captures formatted records into a [`LogBuffer`]
///
pub struct BufferLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl BufferLogger {
    pub fn new(buffer: LogBuffer, level: LevelFilter) -> Self {
        BufferLogger { buffer, level }
    }

    /// Install as the global logger.
    ///
    pub fn init(self) -> Result<(), SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // A poisoned buffer only loses log lines
        if let Ok(mut entries) = self.buffer.lock() {
            if entries.len() >= LOG_CAPACITY {
                entries.pop_front();
            }
            entries.push_back(format_log(record));
        }
    }

    fn flush(&self) {}
}
