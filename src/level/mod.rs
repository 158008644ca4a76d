//! The five fixed severities and the styles they render with.

use crate::fmt::{Background, FontColor, FontStyle, Style};
use std::fmt;
use std::str::FromStr;

/// Declaration order is the integer order `set_active_level` maps through;
/// SUCCESS sits last, so `Ord` here is not a "how bad is it" ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Routine progress messages.
    #[default]
    Info = 0,
    /// Diagnostics meant for the developer.
    Debug = 1,
    /// Something looks off but work continues.
    Warning = 2,
    /// An operation failed.
    Error = 3,
    /// An operation completed as intended.
    Success = 4,
}

/// One color per severity, indexed by discriminant.
const COLORS: [FontColor; 5] = [
    FontColor::White,
    FontColor::Blue,
    FontColor::Yellow,
    FontColor::Red,
    FontColor::Green,
];

impl Severity {
    /// Upper-case because it is printed verbatim inside the `[...]` tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Success => "SUCCESS",
        }
    }

    /// Used by tests, benches, and anything that needs to iterate the closed set.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Info,
            Self::Debug,
            Self::Warning,
            Self::Error,
            Self::Success,
        ]
    }

    /// Out-of-range input clamps to the nearest end rather than failing.
    #[must_use]
    pub const fn from_index(index: i64) -> Self {
        match index {
            i64::MIN..=0 => Self::Info,
            1 => Self::Debug,
            2 => Self::Warning,
            3 => Self::Error,
            _ => Self::Success,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn color(self) -> FontColor {
        COLORS[self.index()]
    }

    /// Style of the `[SEVERITY]` tag.
    #[must_use]
    pub const fn tag_style(self) -> Style {
        Style::new(self.color(), FontStyle::Italic, Background::Neutral)
    }

    /// Style of the wrapped message body.
    #[must_use]
    pub const fn body_style(self) -> Style {
        Style::new(self.color(), FontStyle::Dim, Background::Neutral)
    }

    /// The file sink only knows two textual levels.
    #[must_use]
    pub const fn file_level(self) -> FileLevel {
        match self {
            Self::Warning | Self::Error => FileLevel::Warning,
            Self::Info | Self::Debug | Self::Success => FileLevel::Info,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Textual level written to the log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileLevel {
    Info,
    Warning,
}

impl FileLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
        }
    }
}

impl fmt::Display for FileLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown severity" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "success" => Ok(Self::Success),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
