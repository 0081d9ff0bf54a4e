// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check vocabulary and per-test check sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A named criterion a test case can request.
///
/// Declaration order is evaluation order: the evaluator walks checks in
/// `Ord` order and reports the first failure it meets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Check {
    /// Candidate wrote something on stderr
    #[serde(rename = "has_stderr")]
    HasStderr,
    /// Exit codes are equal
    #[serde(rename = "exitcode")]
    ExitCode,
    /// Standard output is identical
    #[serde(rename = "stdout")]
    Stdout,
    /// Standard error is identical
    #[serde(rename = "stderr")]
    Stderr,
}

impl Check {
    /// Every known check, in evaluation order
    pub const ALL: [Check; 4] = [Check::HasStderr, Check::ExitCode, Check::Stdout, Check::Stderr];

    /// Checks applied when a test case does not list any
    pub const DEFAULT: [Check; 3] = [Check::Stdout, Check::Stderr, Check::ExitCode];

    /// Name used in test files
    pub fn name(self) -> &'static str {
        match self {
            Check::HasStderr => "has_stderr",
            Check::ExitCode => "exitcode",
            Check::Stdout => "stdout",
            Check::Stderr => "stderr",
        }
    }

    /// Look up a check by its test file name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|check| check.name() == name)
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The checks requested by one test case.
///
/// Names outside the known vocabulary are kept in a separate bucket and
/// never evaluated. Callers that want to reject them can inspect
/// [`CheckSet::unknown`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CheckSet {
    known: BTreeSet<Check>,
    unknown: BTreeSet<String>,
}

impl CheckSet {
    /// A set requesting nothing; every comparison passes under it.
    pub fn empty() -> Self {
        Self {
            known: BTreeSet::new(),
            unknown: BTreeSet::new(),
        }
    }

    /// Build a set from test file names, sorting unknown names aside.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        for name in names {
            let name = name.as_ref();
            match Check::from_name(name) {
                Some(check) => {
                    set.known.insert(check);
                }
                None => {
                    tracing::debug!(name, "ignoring unknown check");
                    set.unknown.insert(name.to_string());
                }
            }
        }
        set
    }

    pub fn insert(&mut self, check: Check) {
        self.known.insert(check);
    }

    pub fn contains(&self, check: Check) -> bool {
        self.known.contains(&check)
    }

    /// Known checks in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = Check> + '_ {
        self.known.iter().copied()
    }

    /// Unrecognized names, sorted
    pub fn unknown(&self) -> impl Iterator<Item = &str> {
        self.unknown.iter().map(String::as_str)
    }

    pub fn has_unknown(&self) -> bool {
        !self.unknown.is_empty()
    }

    /// Number of known checks
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// True when no known check is requested (unknown names do not count)
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl Default for CheckSet {
    fn default() -> Self {
        Check::DEFAULT.into_iter().collect()
    }
}

impl FromIterator<Check> for CheckSet {
    fn from_iter<T: IntoIterator<Item = Check>>(iter: T) -> Self {
        Self {
            known: iter.into_iter().collect(),
            unknown: BTreeSet::new(),
        }
    }
}

impl From<Vec<String>> for CheckSet {
    fn from(names: Vec<String>) -> Self {
        Self::from_names(names)
    }
}

impl From<CheckSet> for Vec<String> {
    fn from(set: CheckSet) -> Self {
        set.known
            .iter()
            .map(|check| check.name().to_string())
            .chain(set.unknown)
            .collect()
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
