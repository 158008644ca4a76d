//! Word-granular wrapping of the message body.

use super::PREFIX_WIDTH;

/// Continuation lines are indented to sit under the first body character.
pub const INDENT_WIDTH: usize = PREFIX_WIDTH;

/// Collapses whitespace runs and breaks the message into lines of at most
/// `max_width` characters, counting one separator per placed word.
///
/// Words are never split. A word longer than `max_width` gets a line to
/// itself, and every line after the first starts with `INDENT_WIDTH` spaces.
#[must_use]
pub fn wrap(message: &str, max_width: usize) -> String {
    let mut out = String::with_capacity(message.len());
    let mut count = 0usize;

    for word in message.split_whitespace() {
        let len = word.chars().count();
        if count > 0 && count + len > max_width {
            out.push('\n');
            out.extend(std::iter::repeat_n(' ', INDENT_WIDTH));
            count = 0;
        } else if count > 0 {
            out.push(' ');
        }
        out.push_str(word);
        count += len + 1;
    }

    out
}
