// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-based unified diffs between expected and actual output.

use similar::TextDiff;

/// Lines of unchanged context around each hunk
const CONTEXT_LINES: usize = 3;

/// Render a unified diff from `expected` to `actual`.
///
/// Removed lines come from the reference run and are prefixed `-` under the
/// `--- expected` header; added lines come from the candidate and are
/// prefixed `+` under `+++ actual`. Identical inputs produce an empty string.
pub fn unified_diff(expected: &str, actual: &str) -> String {
    TextDiff::from_lines(expected, actual)
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .header("expected", "actual")
        .to_string()
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
