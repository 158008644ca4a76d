//! Unified error type for melodylog's internal seams.
//!
//! Callers of the logging methods never see these: `ConsoleLogger::emit`
//! downgrades them to a warning line. They surface only from `flush`/`close`
//! and from custom `Output` implementations.

/// Error type for melodylog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from stdout or the log file.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
