// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One harness invocation: load the suite, drive both shells, report.

use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{ConfigError, HarnessConfig};
use crate::harness::{Harness, HarnessError};
use crate::report::{Reporter, RunSummary};
use crate::runner::ShellRunner;
use crate::suite::{SuiteError, TestSuite};
use shtest_capture::OutcomeLog;

/// Exit status for setup failures (bad config, unreadable suite, launch failure)
pub const FATAL_EXIT: u8 = 2;

/// Exit status when `--exit-code` is set and a test failed
pub const KO_EXIT: u8 = 1;

/// Fatal errors: the run could not be completed
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Suite(#[from] SuiteError),

    #[error(transparent)]
    Harness(#[from] HarnessError),

    #[error("Failed to create record file '{}': {source}", .path.display())]
    Record {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Run the configured suite, writing the report to `out`.
pub async fn run<W: Write>(config: &HarnessConfig, out: W) -> Result<RunSummary, AppError> {
    let mut suite = TestSuite::load(&config.tests_file, config.check_policy)?;
    if let Some(ref pattern) = config.filter {
        suite = suite.filter(pattern);
        tracing::info!(pattern, cases = suite.len(), "filtered suite");
    }

    let runner = ShellRunner::new().with_timeout(config.timeout);
    let mut harness = Harness::new(runner, config.reference.clone(), config.candidate.clone());
    if let Some(ref path) = config.record {
        let log = OutcomeLog::with_file(path).map_err(|source| AppError::Record {
            path: path.clone(),
            source,
        })?;
        harness = harness.with_log(log);
    }

    let summary = harness
        .run(&suite, Reporter::new(out, config.color))
        .await?;
    Ok(summary)
}

/// Process exit status for a completed run.
///
/// Always 0 unless `fail_on_ko` is set, matching the reference harness.
pub fn exit_status(config: &HarnessConfig, summary: &RunSummary) -> u8 {
    if config.fail_on_ko && !summary.all_passed() {
        KO_EXIT
    } else {
        0
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
