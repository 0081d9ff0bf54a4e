// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_from_bytes_valid_utf8() {
    let result = ExecutionResult::from_bytes(b"hi\n", b"", 0);
    assert_eq!(result, ExecutionResult::new("hi\n", "", 0));
    assert!(result.success());
}

#[test]
fn test_from_bytes_replaces_invalid_utf8() {
    let result = ExecutionResult::from_bytes(b"ok\xff\n", b"\xc3", 1);
    assert_eq!(result.stdout, "ok\u{FFFD}\n");
    assert_eq!(result.stderr, "\u{FFFD}");
    assert!(!result.success());
}

#[test]
fn test_serializes_as_flat_object() {
    let result = ExecutionResult::new("out", "err", 3);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["stdout"], "out");
    assert_eq!(json["stderr"], "err");
    assert_eq!(json["exit_code"], 3);
}
