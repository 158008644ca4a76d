#![forbid(unsafe_code)]

//! `melodylog` - leveled console logging with color, timestamps, and word wrap.
//!
//! Each call renders one line to stdout:
//! - a `[SEVERITY]` tag in the severity's color
//! - a `<YYYY-MM-DD HH:MM:SS>` timestamp
//! - the message body, word-wrapped with continuation lines indented under it
//!
//! An optional file sink mirrors every record to `MelodyLog.log` as plain text.
//!
//! # Example
//!
//! ```
//! use melodylog::{ConsoleLogger, Severity};
//!
//! let logger = ConsoleLogger::builder().max_width(80).build();
//!
//! logger.info("Application started");
//! logger.success("Model loaded");
//! logger.line();
//!
//! logger.set_active_level(2);
//! logger.print("Printed as WARNING");
//! logger.emit(Severity::Debug, "Explicit severity");
//! ```
//!
//! # Features
//!
//! - `log`: Implements `log::Log` for `ConsoleLogger`

pub mod config;
mod error;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
pub mod output;

#[cfg(feature = "log")]
pub mod bridge;

pub use config::{DEFAULT_MAX_WIDTH, LoggerConfig, MIN_MAX_WIDTH};
pub use error::Error;
pub use level::{FileLevel, ParseSeverityError, Severity};
pub use logger::{ConsoleLogger, LoggerBuilder};
pub use output::{DEFAULT_LOG_FILE, FileOutput, LogRecord, Output, TerminalOutput};
