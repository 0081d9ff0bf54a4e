// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test case model and suite loading.
//!
//! A suite file is a YAML sequence of records:
//! ```yaml
//! - name: echo
//!   input: "echo hi\n"
//!   checks: [stdout, exitcode]
//! ```
//! `checks` is optional and defaults to `stdout`, `stderr` and `exitcode`.

use serde::Deserialize;
use shtest_compare::CheckSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a suite
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Failed to read test file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse test file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown check '{name}' in test '{test}'")]
    UnknownCheck { test: String, name: String },
}

/// How unrecognized check names are treated at load time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckPolicy {
    /// Keep them; they are never evaluated
    #[default]
    Permissive,
    /// Fail the load
    Strict,
}

/// One scenario: a script fed to both shells and the checks to apply
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub input: String,
    #[serde(default)]
    pub checks: CheckSet,
}

impl TestCase {
    pub fn new(name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            checks: CheckSet::default(),
        }
    }

    pub fn with_checks(mut self, checks: CheckSet) -> Self {
        self.checks = checks;
        self
    }
}

/// Ordered collection of test cases, in file order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestSuite {
    cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(cases: Vec<TestCase>) -> Self {
        Self { cases }
    }

    /// Load a suite from a YAML file
    pub fn load(path: &Path, policy: CheckPolicy) -> Result<Self, SuiteError> {
        let content = std::fs::read_to_string(path).map_err(|source| SuiteError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let suite = Self::from_yaml(&content, policy)?;
        tracing::info!(path = %path.display(), cases = suite.len(), "loaded test suite");
        Ok(suite)
    }

    /// Parse a suite from YAML text
    pub fn from_yaml(content: &str, policy: CheckPolicy) -> Result<Self, SuiteError> {
        // An empty document is an empty suite rather than a parse error
        let cases: Option<Vec<TestCase>> = if content.trim().is_empty() {
            None
        } else {
            serde_yaml::from_str(content)?
        };
        let suite = Self::new(cases.unwrap_or_default());
        if policy == CheckPolicy::Strict {
            suite.reject_unknown_checks()?;
        }
        Ok(suite)
    }

    fn reject_unknown_checks(&self) -> Result<(), SuiteError> {
        for case in &self.cases {
            if let Some(name) = case.checks.unknown().next() {
                return Err(SuiteError::UnknownCheck {
                    test: case.name.clone(),
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Keep only cases whose name contains `pattern`, preserving order
    pub fn filter(self, pattern: &str) -> Self {
        Self {
            cases: self
                .cases
                .into_iter()
                .filter(|case| case.name.contains(pattern))
                .collect(),
        }
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
