//! Diagnostic log
//!
//! Log lines are appended to a file as
//! `YYYY-MM-DD HH:MM:SS,mmm - LEVEL - message`. The logger is handed to the
//! components that need it as a `&dyn log::Log` rather than installed as the
//! process-wide logger, so tests can pass their own.

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Log file used when none is configured
pub const DEFAULT_LOG_FILE: &str = "library_finder.log";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Append-only file logger
pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    /// Open (or create) `path` for appending, recording INFO and above
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(FileLogger {
            file: Mutex::new(file),
            level: LevelFilter::Info,
        })
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(Local::now(), record.level(), record.args());
        if let Ok(mut file) = self.file.lock() {
            // A failing log write must never take the session down
            let _ = writeln!(file, "{}", line);
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Render one log line without the trailing newline
pub fn format_line(at: DateTime<Local>, level: Level, message: &fmt::Arguments<'_>) -> String {
    format!("{} - {} - {}", at.format(TIME_FORMAT), level, message)
}

/// Send a message to an explicitly passed logger
pub fn emit(logger: &dyn Log, level: Level, args: fmt::Arguments<'_>) {
    logger.log(
        &Record::builder()
            .level(level)
            .target(module_path!())
            .args(args)
            .build(),
    );
}
