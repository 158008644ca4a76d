//! Tests for severity functionality.

use melodylog::fmt::{Background, FontColor, FontStyle};
use melodylog::{FileLevel, Severity};

#[test]
fn severity_index_order() {
    let indices: Vec<usize> = Severity::all().iter().map(|s| s.index()).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
}

#[test]
fn severity_display() {
    assert_eq!(Severity::Info.to_string(), "INFO");
    assert_eq!(Severity::Debug.to_string(), "DEBUG");
    assert_eq!(Severity::Warning.to_string(), "WARNING");
    assert_eq!(Severity::Error.to_string(), "ERROR");
    assert_eq!(Severity::Success.to_string(), "SUCCESS");
}

#[test]
fn from_index_maps_fixed_order() {
    assert_eq!(Severity::from_index(0), Severity::Info);
    assert_eq!(Severity::from_index(1), Severity::Debug);
    assert_eq!(Severity::from_index(2), Severity::Warning);
    assert_eq!(Severity::from_index(3), Severity::Error);
    assert_eq!(Severity::from_index(4), Severity::Success);
}

#[test]
fn from_index_clamps_out_of_range() {
    assert_eq!(Severity::from_index(-1), Severity::Info);
    assert_eq!(Severity::from_index(i64::MIN), Severity::Info);
    assert_eq!(Severity::from_index(9), Severity::Success);
    assert_eq!(Severity::from_index(i64::MAX), Severity::Success);
}

#[test]
fn severity_from_str() {
    assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
    assert_eq!("DEBUG".parse::<Severity>().unwrap(), Severity::Debug);
    assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("Warning".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("err".parse::<Severity>().unwrap(), Severity::Error);
    assert_eq!("success".parse::<Severity>().unwrap(), Severity::Success);
}

#[test]
fn severity_from_str_invalid() {
    let err = "trace".parse::<Severity>().unwrap_err();
    assert_eq!(err.to_string(), "unknown severity: 'trace'");
}

#[test]
fn severity_default() {
    assert_eq!(Severity::default(), Severity::Info);
}

#[test]
fn colors_follow_fixed_table() {
    assert_eq!(Severity::Info.color(), FontColor::White);
    assert_eq!(Severity::Debug.color(), FontColor::Blue);
    assert_eq!(Severity::Warning.color(), FontColor::Yellow);
    assert_eq!(Severity::Error.color(), FontColor::Red);
    assert_eq!(Severity::Success.color(), FontColor::Green);
}

#[test]
fn tag_and_body_styles_share_color() {
    for severity in Severity::all() {
        let tag = severity.tag_style();
        let body = severity.body_style();
        assert_eq!(tag.color, body.color);
        assert_eq!(tag.font, FontStyle::Italic);
        assert_eq!(body.font, FontStyle::Dim);
        assert_eq!(tag.background, Background::Neutral);
        assert_eq!(body.background, Background::Neutral);
    }
}

#[test]
fn file_level_splits_warning_and_error() {
    assert_eq!(Severity::Info.file_level(), FileLevel::Info);
    assert_eq!(Severity::Debug.file_level(), FileLevel::Info);
    assert_eq!(Severity::Success.file_level(), FileLevel::Info);
    assert_eq!(Severity::Warning.file_level(), FileLevel::Warning);
    assert_eq!(Severity::Error.file_level(), FileLevel::Warning);
    assert_eq!(FileLevel::Warning.to_string(), "WARNING");
}
