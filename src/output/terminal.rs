//! Console sink: one colorized line per record, written to stdout unless a
//! different writer is injected.

use crate::fmt::{self, strip_ansi};

use super::{LogRecord, Output};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Holds the writer behind a mutex so concurrent records never interleave mid-line.
pub struct TerminalOutput {
    /// Piped output and CI logs are easier to read without escapes.
    colors_enabled: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TerminalOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalOutput")
            .field("colors_enabled", &self.colors_enabled)
            .finish_non_exhaustive()
    }
}

impl TerminalOutput {
    /// Colored output to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Redirects output, e.g. to stderr or an in-memory buffer in tests.
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            colors_enabled: true,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors_enabled
    }

    /// The full console line for a record, without the trailing newline.
    #[must_use]
    pub fn format_record(&self, record: &LogRecord) -> String {
        let line = fmt::format::line(
            record.severity,
            &record.message,
            &record.timestamp,
            record.max_width,
        );
        self.finish(line)
    }

    /// Writes the separator rule. It carries no timestamp, so it bypasses `LogRecord`.
    ///
    /// # Errors
    /// I/O errors from the writer.
    pub fn write_rule(&self, max_width: usize) -> Result<(), crate::Error> {
        let rule = self.finish(fmt::rule(max_width));
        self.write_line(&rule)
    }

    fn finish(&self, line: String) -> String {
        if self.colors_enabled {
            line
        } else {
            strip_ansi(&line)
        }
    }

    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{line}")?;
        Ok(())
    }
}

impl Output for TerminalOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let formatted = self.format_record(record);
        self.write_line(&formatted)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()?;
        Ok(())
    }
}
