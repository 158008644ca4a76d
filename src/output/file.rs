//! Plain-text file sink. The handle is opened on the first write after the
//! sink is enabled and released by `close`, so a disabled sink never touches disk.

use crate::fmt::TIMESTAMP_FORMAT;

use super::{LogRecord, Output};
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// File sink target, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "MelodyLog.log";

/// Appends `timestamp LEVEL: message` lines to a single file.
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    /// `LineWriter` flushes every completed line, so nothing is lost if the process exits abruptly.
    handle: Mutex<Option<LineWriter<File>>>,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl FileOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::with_path(DEFAULT_LOG_FILE)
    }

    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            handle: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a handle is currently held.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    /// Unwrapped, uncolored message with the two-level textual severity.
    #[must_use]
    pub fn format_content(record: &LogRecord) -> String {
        format!(
            "{} {}: {}",
            record.timestamp.format(TIMESTAMP_FORMAT),
            record.severity.file_level(),
            record.message
        )
    }

    /// Flushes and drops the handle. The next write reopens it.
    ///
    /// # Errors
    /// The flush error, if any. The handle is released either way.
    pub fn close(&self) -> Result<(), crate::Error> {
        let handle = self.lock().take();
        if let Some(mut writer) = handle {
            writer.flush()?;
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Option<LineWriter<File>>> {
        self.handle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn open(&self) -> Result<LineWriter<File>, crate::Error> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        Ok(LineWriter::new(file))
    }
}

impl Output for FileOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let mut handle = self.lock();
        if handle.is_none() {
            *handle = Some(self.open()?);
        }

        let mut content = Self::format_content(record);
        content.push('\n');
        if let Some(writer) = handle.as_mut() {
            writer.write_all(content.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        if let Some(writer) = self.lock().as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}
