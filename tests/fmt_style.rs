use melodylog::fmt::{Background, FontColor, FontStyle, RESET, Style, strip_ansi, visible_len};

#[test]
fn codes_match_sgr_numbers() {
    assert_eq!(FontColor::Black.code(), 30);
    assert_eq!(FontColor::White.code(), 37);
    assert_eq!(FontStyle::Dim.code(), 2);
    assert_eq!(FontStyle::Italic.code(), 3);
    assert_eq!(Background::Neutral.code(), 49);
    assert_eq!(Background::Black.code(), 40);
}

#[test]
fn paint_wraps_with_triple_and_reset() {
    let style = Style::new(FontColor::Red, FontStyle::Bold, Background::White);
    assert_eq!(style.paint("hi"), "\x1b[31;1;47mhi\x1b[0m");
    assert_eq!(style.to_string(), "31;1;47");
}

#[test]
fn builtin_styles() {
    assert_eq!(Style::TIMESTAMP.sgr(), "\x1b[35;4;49m");
    assert_eq!(Style::RULE.sgr(), "\x1b[36;1;49m");
}

#[test]
fn strip_ansi_removes_all_sgr_sequences() {
    let painted = format!(
        "{}{}",
        Style::RULE.paint("left"),
        Style::TIMESTAMP.paint("right")
    );
    assert_eq!(strip_ansi(&painted), "leftright");
    assert_eq!(strip_ansi(&format!("a{RESET}b")), "ab");
}

#[test]
fn strip_ansi_leaves_plain_text_alone() {
    assert_eq!(strip_ansi("[INFO] <no escapes> here"), "[INFO] <no escapes> here");
}

#[test]
fn visible_len_ignores_escapes() {
    let painted = Style::RULE.paint("✂---");
    assert_eq!(visible_len(&painted), 4);
}
