//! `log` facade support: routes `log::info!` and friends through a `ConsoleLogger`.

use crate::global;
use crate::level::Severity;
use crate::logger::ConsoleLogger;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// TRACE has no severity of its own and shares DEBUG. SUCCESS is unreachable from the facade.
#[must_use]
pub const fn severity_for(level: log::Level) -> Severity {
    match level {
        log::Level::Error => Severity::Error,
        log::Level::Warn => Severity::Warning,
        log::Level::Info => Severity::Info,
        log::Level::Debug | log::Level::Trace => Severity::Debug,
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.emit(severity_for(record.level()), &record.args().to_string());
    }

    fn flush(&self) {
        let _ = ConsoleLogger::flush(self);
    }
}

/// Registers the shared `global` logger with the facade.
///
/// # Errors
/// Fails if another `log` backend is already installed.
pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(global::logger())?;
    log::set_max_level(max_level);
    Ok(())
}
