//! Console rendering is split by concern: SGR codes, style descriptors,
//! line layout, and word wrapping.

mod color;
pub mod format;
pub mod style;
mod wrap;

pub use color::{Background, FontColor};
pub use format::{
    ARROW, PREFIX_WIDTH, RULE_MARKER, TAG_WIDTH, TIMESTAMP_FORMAT, TIMESTAMP_WIDTH, body, prefix,
    rule, tag_text, timestamp_text,
};
pub use style::{FontStyle, RESET, Style, strip_ansi, visible_len};
pub use wrap::{INDENT_WIDTH, wrap};
