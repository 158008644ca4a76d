//! Stepwise construction for the settings that are fixed once the logger exists
//! (writer, colors, file path) alongside the initial values of the mutable ones.

use super::ConsoleLogger;
use crate::config::{LoggerConfig, clamp_width};
use crate::level::Severity;
use crate::output::{FileOutput, TerminalOutput};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Consuming builder for `ConsoleLogger`.
#[derive(Debug, Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    terminal: Option<TerminalOutput>,
    colors: Option<bool>,
    file_path: Option<PathBuf>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Same rule as `ConsoleLogger::set_max_width`: below 40 means 140.
    #[must_use]
    pub fn max_width(mut self, width: i64) -> Self {
        self.config.max_width = clamp_width(width);
        self
    }

    /// Severity `print` will dispatch to.
    #[must_use]
    pub const fn active_level(mut self, severity: Severity) -> Self {
        self.config.active_level = severity;
        self
    }

    /// Starts with the file sink on. The file is still only opened on first write.
    #[must_use]
    pub const fn file_sink(mut self, enabled: bool) -> Self {
        self.config.file_sink_enabled = enabled;
        self
    }

    /// Overrides `MelodyLog.log` in the working directory.
    #[must_use]
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Console output goes here instead of stdout.
    #[must_use]
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.terminal = Some(TerminalOutput::with_writer(writer));
        self
    }

    /// Piped output usually wants escapes stripped.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = Some(enabled);
        self
    }

    #[must_use]
    pub fn build(self) -> ConsoleLogger {
        let mut terminal = self.terminal.unwrap_or_default();
        if let Some(enabled) = self.colors {
            terminal = terminal.colors(enabled);
        }

        ConsoleLogger {
            config: Mutex::new(self.config),
            terminal,
            file: self
                .file_path
                .map_or_else(FileOutput::new, FileOutput::with_path),
        }
    }
}
