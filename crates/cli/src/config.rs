// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration resolved from the command line.

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::cli::Cli;
use crate::runner::Program;
use crate::suite::CheckPolicy;

/// Known-good shell used as the oracle
pub const DEFAULT_REFERENCE: &str = "dash";

/// Suite file looked up in the working directory
pub const DEFAULT_TESTS_FILE: &str = "tests.yml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Candidate binary not found: {0}")]
    BinaryNotFound(String),

    #[error("Failed to determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

/// Everything a run needs, with paths already resolved
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// Absolute path of the shell under test
    pub candidate: Program,
    pub reference: Program,
    pub tests_file: PathBuf,
    /// Per-process limit; None waits forever
    pub timeout: Option<Duration>,
    pub filter: Option<String>,
    pub check_policy: CheckPolicy,
    /// Exit non-zero when a test fails
    pub fail_on_ko: bool,
    pub record: Option<PathBuf>,
    pub color: bool,
}

impl HarnessConfig {
    pub fn new(candidate: impl Into<PathBuf>) -> Self {
        Self {
            candidate: Program::new(candidate),
            reference: Program::new(DEFAULT_REFERENCE),
            tests_file: PathBuf::from(DEFAULT_TESTS_FILE),
            timeout: None,
            filter: None,
            check_policy: CheckPolicy::Permissive,
            fail_on_ko: false,
            record: None,
            color: false,
        }
    }

    /// Build a config from parsed arguments, resolving the candidate against
    /// the current directory.
    pub fn from_cli(cli: &Cli, stdout_is_terminal: bool) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
        Self::from_cli_in(cli, &cwd, stdout_is_terminal)
    }

    /// Like [`HarnessConfig::from_cli`] with an explicit working directory
    pub fn from_cli_in(
        cli: &Cli,
        cwd: &Path,
        stdout_is_terminal: bool,
    ) -> Result<Self, ConfigError> {
        let candidate = resolve_candidate(&cli.binary, cwd)?;
        Ok(Self {
            candidate: Program::new(candidate),
            reference: Program::new(&cli.reference),
            tests_file: cli.tests.clone(),
            timeout: cli.timeout.map(Duration::from_secs),
            filter: cli.filter.clone(),
            check_policy: if cli.strict_checks {
                CheckPolicy::Strict
            } else {
                CheckPolicy::Permissive
            },
            fail_on_ko: cli.exit_code,
            record: cli.record.clone(),
            color: cli.color.enabled(stdout_is_terminal),
        })
    }
}

/// Make `path` absolute relative to `cwd` and check that it names a file.
pub fn resolve_candidate(path: &Path, cwd: &Path) -> Result<PathBuf, ConfigError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    if !absolute.is_file() {
        return Err(ConfigError::BinaryNotFound(absolute.display().to_string()));
    }
    Ok(absolute)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
