//! A style is the `color;font;background` triple of one SGR escape. Keeping
//! it a small `Copy` value lets severities map to styles through a const table.

use super::{Background, FontColor};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Terminates any active SGR styling so subsequent text returns to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// Matches any CSI sequence ending in `m`.
static SGR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("Invalid SGR regex"));

/// Font attribute, rendered as its SGR code (0–6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Reset = 0,
    Bold = 1,
    Dim = 2,
    Italic = 3,
    Underline = 4,
    SlowBlink = 5,
    FastBlink = 6,
}

impl FontStyle {
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Immutable style descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub color: FontColor,
    pub font: FontStyle,
    pub background: Background,
}

impl Style {
    /// Magenta underline used for the `<timestamp>` block.
    pub const TIMESTAMP: Self =
        Self::new(FontColor::Magenta, FontStyle::Underline, Background::Neutral);

    /// Bold cyan used for the `line()` separator.
    pub const RULE: Self = Self::new(FontColor::Cyan, FontStyle::Bold, Background::Neutral);

    #[must_use]
    pub const fn new(color: FontColor, font: FontStyle, background: Background) -> Self {
        Self {
            color,
            font,
            background,
        }
    }

    /// The opening escape without text or reset.
    #[must_use]
    pub fn sgr(self) -> String {
        format!(
            "\x1b[{};{};{}m",
            self.color.code(),
            self.font.code(),
            self.background.code()
        )
    }

    /// Wraps `text` in this style and a trailing reset.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("{}{text}{RESET}", self.sgr())
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{}",
            self.color.code(),
            self.font.code(),
            self.background.code()
        )
    }
}

/// Width checks and plain-text sinks need the text without escapes inflating it.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    SGR_REGEX.replace_all(text, "").into_owned()
}

/// Printable width in `char`s, ignoring escapes.
#[must_use]
pub fn visible_len(text: &str) -> usize {
    strip_ansi(text).chars().count()
}
