//! Logger utility for application-wide logging
//!
//! This module provides a logger that works alongside the standard log
//! crate and adds file output for recording tiling and cropping runs.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

use crate::geometry::BoundingBox;

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output, `None` when only logging through `log`
    file: Mutex<Option<File>>,
    /// Most verbose level written by the `Log` implementation
    level: Level,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: Level::Debug,
        })
    }

    /// Creates a logger without a file; messages are dropped
    pub fn detached() -> Self {
        Logger {
            file: Mutex::new(None),
            level: Level::Info,
        }
    }

    /// Sets the most verbose level emitted through the `log` facade
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs a list of labelled boxes in a formatted way
    ///
    /// # Arguments
    ///
    /// * `title` - Heading written above the list
    /// * `boxes` - Label and box pairs
    pub fn print_boxes(&self, title: &str, boxes: &[(String, BoundingBox)]) -> io::Result<()> {
        self.log(title)?;

        for (label, bbox) in boxes {
            let center = bbox.get_center();
            let message = format!(
                "  {}: {} area={} center=({}, {})",
                label, bbox, bbox.get_area(), center.x, center.y
            );
            self.log(&message)?;
        }

        Ok(())
    }

    /// Static method to initialize the global logger writing to `log_file`
    pub fn init_global_logger<P: AsRef<Path>>(log_file: P, level: Level) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?.with_level(level);

        // Only called once at startup; a second logger is reported and ignored
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level.to_level_filter());
        Ok(())
    }

    /// Initialize console logging through `env_logger`
    ///
    /// `RUST_LOG` takes precedence over `default_level`.
    pub fn init_console_logger(default_level: LevelFilter) {
        let env = env_logger::Env::default().default_filter_or(default_level.as_str());
        if env_logger::Builder::from_env(env).try_init().is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Also print to console
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_logger_writes_boxes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regionkit.log");
        let logger = Logger::new(&path).unwrap();

        let boxes = vec![("face".to_string(), BoundingBox::new(10, 10, 20, 20).unwrap())];
        logger.print_boxes("Boxes:", &boxes).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Boxes:\n"));
        assert!(content.contains("face: [10, 10, 20, 20] area=400 center=(20, 20)"));
    }

    #[test]
    fn test_detached_logger_accepts_messages() {
        let logger = Logger::detached();
        assert!(logger.log("nothing to see").is_ok());
    }
}
