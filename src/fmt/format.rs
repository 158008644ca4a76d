//! Assembles the fixed-layout pieces of a console line: the padded tag, the
//! timestamp block, the body, and the separator rule.

use super::{Style, wrap};
use crate::level::Severity;
use chrono::{DateTime, Local};

/// Visible width of the tag column, wide enough for `[WARNING]` plus padding.
pub const TAG_WIDTH: usize = 11;

/// Visible width of `<YYYY-MM-DD HH:MM:SS>`.
pub const TIMESTAMP_WIDTH: usize = 21;

/// Separates the prefix from the body.
pub const ARROW: &str = " -> ";

/// Visible width of everything before the body.
pub const PREFIX_WIDTH: usize = TAG_WIDTH + 1 + TIMESTAMP_WIDTH + ARROW.len();

/// Leading glyph of the separator rule.
pub const RULE_MARKER: char = '✂';

/// strftime pattern shared by the console and the file sink.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `[SEVERITY]` left-aligned in `TAG_WIDTH` columns, truncated if it would overflow.
#[must_use]
pub fn tag_text(severity: Severity) -> String {
    let tag = format!("[{}]", severity.as_str());
    let tag: String = tag.chars().take(TAG_WIDTH).collect();
    format!("{tag:<TAG_WIDTH$}")
}

#[must_use]
pub fn timestamp_text(timestamp: &DateTime<Local>) -> String {
    format!("<{}>", timestamp.format(TIMESTAMP_FORMAT))
}

/// Padding stays outside the escape so the column width counts only printable text.
#[must_use]
pub fn prefix(severity: Severity, timestamp: &DateTime<Local>) -> String {
    let tag = tag_text(severity);
    let label = tag.trim_end();
    let padding = &tag[label.len()..];
    format!(
        "{}{padding} {}{ARROW}",
        severity.tag_style().paint(label),
        Style::TIMESTAMP.paint(&timestamp_text(timestamp)),
    )
}

/// Wrapped and dimmed message body. Continuation lines are not re-prefixed.
#[must_use]
pub fn body(severity: Severity, message: &str, max_width: usize) -> String {
    severity.body_style().paint(&wrap(message, max_width))
}

/// One complete console line for `severity`, without the trailing newline.
#[must_use]
pub fn line(
    severity: Severity,
    message: &str,
    timestamp: &DateTime<Local>,
    max_width: usize,
) -> String {
    let mut out = prefix(severity, timestamp);
    out.push_str(&body(severity, message, max_width));
    out
}

/// Separator spanning the prefix plus body width, framed by blank lines.
#[must_use]
pub fn rule(max_width: usize) -> String {
    let dashes = (max_width + PREFIX_WIDTH).saturating_sub(1);
    let mut text = String::with_capacity(dashes + 8);
    text.push('\n');
    text.push(RULE_MARKER);
    text.extend(std::iter::repeat_n('-', dashes));
    text.push('\n');
    Style::RULE.paint(&text)
}
