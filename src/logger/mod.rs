//! `ConsoleLogger` renders one line per call to the console and, when the
//! file sink is on, mirrors it to the log file. Config lives inside the
//! logger behind a mutex held for the whole of each call, so lines never
//! interleave and a setter never lands halfway through a record.

mod builder;

pub use builder::LoggerBuilder;

use crate::config::LoggerConfig;
use crate::level::Severity;
use crate::output::{FileOutput, LogRecord, Output, TerminalOutput};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Owns its config and both sinks. Share it by reference, or use `crate::global`.
#[derive(Debug, Default)]
pub struct ConsoleLogger {
    config: Mutex<LoggerConfig>,
    terminal: TerminalOutput,
    file: FileOutput,
}

impl ConsoleLogger {
    /// Defaults: stdout, wrap width 140, dispatch level INFO, file sink off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Writes one record at `severity`. Never fails: a file sink error is
    /// reported on the console as a WARNING line and the call returns normally.
    pub fn emit(&self, severity: Severity, msg: &str) {
        let config = self.lock_config();
        self.emit_locked(&config, severity, msg);
    }

    fn emit_locked(&self, config: &LoggerConfig, severity: Severity, msg: &str) {
        let record = LogRecord::new(severity, msg, config.max_width);

        if config.file_sink_enabled
            && let Err(e) = self.file.write(&record)
        {
            self.report_file_failure(config, &e);
        }

        let _ = self.terminal.write(&record);
    }

    /// The failure line goes to the console only; routing it to the failing file would loop.
    fn report_file_failure(&self, config: &LoggerConfig, error: &crate::Error) {
        let record = LogRecord::new(
            Severity::Warning,
            &format!("[WARNING]: {error}"),
            config.max_width,
        );
        let _ = self.terminal.write(&record);
    }

    pub fn info(&self, msg: &str) {
        self.emit(Severity::Info, msg);
    }

    pub fn debug(&self, msg: &str) {
        self.emit(Severity::Debug, msg);
    }

    pub fn warning(&self, msg: &str) {
        self.emit(Severity::Warning, msg);
    }

    pub fn error(&self, msg: &str) {
        self.emit(Severity::Error, msg);
    }

    pub fn success(&self, msg: &str) {
        self.emit(Severity::Success, msg);
    }

    /// Emits at the configured dispatch level. This picks a severity; it
    /// does not filter anything.
    pub fn print(&self, msg: &str) {
        let config = self.lock_config();
        self.emit_locked(&config, config.active_level, msg);
    }

    /// Separator rule on the console only. It has no timestamp or body and is
    /// never written to the file.
    pub fn line(&self) {
        let config = self.lock_config();
        let _ = self.terminal.write_rule(config.max_width);
    }

    /// Clamps to `[0, 4]`: INFO, DEBUG, WARNING, ERROR, SUCCESS.
    pub fn set_active_level(&self, level: i64) {
        self.lock_config().set_active_level(level);
    }

    /// Values below 40 reset to the default of 140.
    pub fn set_max_width(&self, width: i64) {
        self.lock_config().set_max_width(width);
    }

    /// Disabling also releases the file handle; re-enabling reopens lazily.
    pub fn set_file_sink_enabled(&self, enabled: bool) {
        let mut config = self.lock_config();
        config.set_file_sink_enabled(enabled);
        if !enabled {
            let _ = self.file.close();
        }
    }

    /// Snapshot of the current settings.
    #[must_use]
    pub fn config(&self) -> LoggerConfig {
        *self.lock_config()
    }

    #[must_use]
    pub fn active_level(&self) -> Severity {
        self.lock_config().active_level
    }

    #[must_use]
    pub fn max_width(&self) -> usize {
        self.lock_config().max_width
    }

    #[must_use]
    pub fn file_sink_enabled(&self) -> bool {
        self.lock_config().file_sink_enabled
    }

    #[must_use]
    pub const fn file_output(&self) -> &FileOutput {
        &self.file
    }

    /// # Errors
    /// The first I/O error from the console or the file.
    pub fn flush(&self) -> Result<(), crate::Error> {
        let _config = self.lock_config();
        self.terminal.flush()?;
        self.file.flush()
    }

    /// Flushes both sinks and releases the file handle. The logger stays
    /// usable; a later file write reopens the handle.
    ///
    /// # Errors
    /// The first I/O error from the console or the file.
    pub fn close(&self) -> Result<(), crate::Error> {
        let _config = self.lock_config();
        self.terminal.flush()?;
        self.file.close()
    }

    fn lock_config(&self) -> MutexGuard<'_, LoggerConfig> {
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for ConsoleLogger {
    fn drop(&mut self) {
        let _ = self.terminal.flush();
        let _ = self.file.close();
    }
}
