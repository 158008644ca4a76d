//! The two sinks a record can reach: the colored console and the plain-text
//! log file. Both sit behind the `Output` trait so the logger treats them alike.

mod file;
mod terminal;

pub use file::{DEFAULT_LOG_FILE, FileOutput};
pub use terminal::TerminalOutput;

use crate::level::Severity;
use chrono::{DateTime, Local};

/// One call's worth of data, built at emit time and dropped right after output.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    /// Captured once so the console and file lines carry the same second.
    pub timestamp: DateTime<Local>,
    /// Wrap width in effect when the record was created.
    pub max_width: usize,
}

impl LogRecord {
    /// Stamps the record with the current local time.
    #[must_use]
    pub fn new(severity: Severity, message: &str, max_width: usize) -> Self {
        Self {
            severity,
            message: message.to_string(),
            timestamp: Local::now(),
            max_width,
        }
    }
}

/// `Send + Sync` lets one logger be shared across threads behind a reference.
pub trait Output: Send + Sync {
    /// Renders and writes one record in the sink's own format.
    ///
    /// # Errors
    /// I/O errors from the underlying sink (stdout, file).
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// Pushes out anything still buffered.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
