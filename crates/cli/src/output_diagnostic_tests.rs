#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn error_plain_text_when_not_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "candidate binary not found", false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Error: candidate binary not found\n");
}

#[test]
fn error_with_ansi_when_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "candidate binary not found", true);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "\x1b[31mError: candidate binary not found\x1b[0m\n");
}

#[test]
fn error_with_format_args() {
    let mut buf = Vec::new();
    write_error(&mut buf, format_args!("{} tests could not run", 3), false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Error: 3 tests could not run\n");
}
