//! Process-wide logger settings. Configuration is in-process only: there is
//! no config file and no environment lookup, just a value with clamping setters.

use crate::level::Severity;

/// Wrap width used when none is set or an out-of-range value is rejected.
pub const DEFAULT_MAX_WIDTH: usize = 140;

/// Anything narrower than this falls back to `DEFAULT_MAX_WIDTH`.
pub const MIN_MAX_WIDTH: usize = 40;

/// Mutable settings shared by every call on one logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Mirror each record into the log file.
    pub file_sink_enabled: bool,
    /// Wrap width of the message body, always `>= MIN_MAX_WIDTH`.
    pub max_width: usize,
    /// Severity `print` dispatches to. Not a filter.
    pub active_level: Severity,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file_sink_enabled: false,
            max_width: DEFAULT_MAX_WIDTH,
            active_level: Severity::Info,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Values below `MIN_MAX_WIDTH` (negative included) reset to `DEFAULT_MAX_WIDTH`.
    pub fn set_max_width(&mut self, width: i64) {
        self.max_width = clamp_width(width);
    }

    /// Clamps to `[0, 4]` and maps through `Severity::from_index`.
    pub const fn set_active_level(&mut self, level: i64) {
        self.active_level = Severity::from_index(level);
    }

    pub const fn set_file_sink_enabled(&mut self, enabled: bool) {
        self.file_sink_enabled = enabled;
    }
}

/// Shared by the config setter and the builder so both reject narrow widths the same way.
#[must_use]
pub fn clamp_width(width: i64) -> usize {
    usize::try_from(width)
        .ok()
        .filter(|w| *w >= MIN_MAX_WIDTH)
        .unwrap_or(DEFAULT_MAX_WIDTH)
}
