//! One process-wide logger for callers that would rather not pass an instance around.
//!
//! Built on first use with the defaults (stdout, width 140, INFO, file sink
//! off). Every function here is safe to call from any thread; each call
//! takes the logger's config lock for its whole duration.

use crate::level::Severity;
use crate::logger::ConsoleLogger;
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// The shared instance, created on first access.
pub fn logger() -> &'static ConsoleLogger {
    GLOBAL_LOGGER.get_or_init(ConsoleLogger::new)
}

/// Installs a custom-built logger as the shared instance.
///
/// # Errors
/// Hands the logger back if the shared instance was already created.
pub fn install(logger: ConsoleLogger) -> Result<(), ConsoleLogger> {
    GLOBAL_LOGGER.set(logger)
}

pub fn emit(severity: Severity, msg: &str) {
    logger().emit(severity, msg);
}

pub fn info(msg: &str) {
    logger().info(msg);
}

pub fn debug(msg: &str) {
    logger().debug(msg);
}

pub fn warning(msg: &str) {
    logger().warning(msg);
}

pub fn error(msg: &str) {
    logger().error(msg);
}

pub fn success(msg: &str) {
    logger().success(msg);
}

pub fn print(msg: &str) {
    logger().print(msg);
}

pub fn line() {
    logger().line();
}

pub fn set_active_level(level: i64) {
    logger().set_active_level(level);
}

pub fn set_max_width(width: i64) {
    logger().set_max_width(width);
}

pub fn set_file_sink_enabled(enabled: bool) {
    logger().set_file_sink_enabled(enabled);
}

/// Statics are never dropped, so call this before exit to flush stdout and
/// release the log file.
pub fn shutdown() {
    if let Some(logger) = GLOBAL_LOGGER.get() {
        let _ = logger.close();
    }
}
