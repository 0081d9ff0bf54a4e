// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check evaluation.
//!
//! Compares a reference run against a candidate run under a [`CheckSet`].
//! Every requested check is evaluated in [`Check`] order; the verdict carries
//! the first failure so the reported reason is deterministic.

use crate::check::{Check, CheckSet};
use crate::diff::unified_diff;
use crate::result::ExecutionResult;
use std::fmt;
use std::time::Duration;

/// A failed check and its human-readable explanation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// Check that failed; None when the candidate never finished
    pub check: Option<Check>,
    pub reason: String,
}

impl Failure {
    /// The candidate was killed after running for `after`
    pub fn timed_out(after: Duration) -> Self {
        Self {
            check: None,
            reason: format!("Timed out after {}s", after.as_secs_f64()),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

/// Outcome of comparing one test case
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(Failure),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail(failure) => Some(failure),
        }
    }
}

/// Compare `actual` (candidate) against `expected` (reference).
///
/// An empty check set always passes.
pub fn evaluate(expected: &ExecutionResult, actual: &ExecutionResult, checks: &CheckSet) -> Verdict {
    match evaluate_all(expected, actual, checks).into_iter().next() {
        Some(failure) => Verdict::Fail(failure),
        None => Verdict::Pass,
    }
}

/// Every failing check, in evaluation order.
pub fn evaluate_all(
    expected: &ExecutionResult,
    actual: &ExecutionResult,
    checks: &CheckSet,
) -> Vec<Failure> {
    checks
        .iter()
        .filter_map(|check| check_one(check, expected, actual))
        .collect()
}

fn check_one(check: Check, expected: &ExecutionResult, actual: &ExecutionResult) -> Option<Failure> {
    let reason = match check {
        Check::HasStderr if actual.stderr.is_empty() => {
            "Something was expected on stderr".to_string()
        }
        Check::ExitCode if expected.exit_code != actual.exit_code => format!(
            "Exited with {} expected {}\n\n{}",
            actual.exit_code, expected.exit_code, actual.stderr
        ),
        Check::Stdout if expected.stdout != actual.stdout => format!(
            "stdout differ\n{}",
            unified_diff(&expected.stdout, &actual.stdout)
        ),
        Check::Stderr if expected.stderr != actual.stderr => format!(
            "stderr differ\n{}",
            unified_diff(&expected.stderr, &actual.stderr)
        ),
        _ => return None,
    };
    Some(Failure {
        check: Some(check),
        reason,
    })
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod tests;
