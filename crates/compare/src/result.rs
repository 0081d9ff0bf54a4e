// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured output of a single shell run.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Output and exit status captured from one program invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Captured standard output
    pub stdout: String,

    /// Captured standard error
    pub stderr: String,

    /// Process exit code (negated signal number when killed by a signal)
    pub exit_code: i32,
}

impl ExecutionResult {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    /// Build a result from raw captured bytes.
    ///
    /// Shell output is not guaranteed to be valid UTF-8. Invalid sequences are
    /// replaced with U+FFFD rather than rejected, so a candidate printing
    /// garbage still yields a comparable result.
    pub fn from_bytes(stdout: &[u8], stderr: &[u8], exit_code: i32) -> Self {
        Self {
            stdout: decode_stream("stdout", stdout),
            stderr: decode_stream("stderr", stderr),
            exit_code,
        }
    }

    /// Whether the program exited with code 0
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

fn decode_stream(stream: &str, bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            tracing::warn!(stream, len = bytes.len(), "replaced invalid UTF-8 in output");
            text
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
