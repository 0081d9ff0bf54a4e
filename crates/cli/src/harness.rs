// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness driver.
//!
//! Walks a suite in file order. For each case the reference program runs
//! first, then the candidate, then the two results are compared under that
//! case's own check set. Launch failures abort the whole run; behavioral
//! differences, including a candidate that times out, are recorded and the
//! run moves on.

use crate::report::{ReportError, Reporter, RunSummary};
use crate::runner::{ProcessRunner, Program, RunnerError};
use crate::suite::{TestCase, TestSuite};
use shtest_capture::{OutcomeLog, TestOutcome};
use shtest_compare::{evaluate, ExecutionResult, Failure, Verdict};
use std::io::Write;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::Instrument;

/// Exit code recorded for a candidate killed on timeout (SIGKILL)
const KILLED_EXIT: i32 = -9;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Failed to record outcome: {0}")]
    Record(#[source] std::io::Error),

    #[error("Harness has already run")]
    AlreadyRun,
}

/// Lifecycle of a single run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HarnessState {
    Idle,
    Running,
    Completed,
}

/// Everything produced by one test case
#[derive(Clone, Debug)]
pub struct CaseOutcome {
    pub verdict: Verdict,
    pub reference: ExecutionResult,
    pub candidate: ExecutionResult,
    pub elapsed: Duration,
}

/// Runs a suite against a reference and a candidate program
pub struct Harness<R> {
    runner: R,
    reference: Program,
    candidate: Program,
    log: Option<OutcomeLog>,
    state: HarnessState,
}

impl<R: ProcessRunner> Harness<R> {
    pub fn new(runner: R, reference: Program, candidate: Program) -> Self {
        Self {
            runner,
            reference,
            candidate,
            log: None,
            state: HarnessState::Idle,
        }
    }

    /// Record every outcome into `log`
    pub fn with_log(mut self, log: OutcomeLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn state(&self) -> HarnessState {
        self.state
    }

    pub fn reference(&self) -> &Program {
        &self.reference
    }

    pub fn candidate(&self) -> &Program {
        &self.candidate
    }

    /// Run every case of `suite`, reporting through `reporter`.
    ///
    /// A harness runs once. If a program cannot be launched the error is
    /// returned immediately and the harness stays in `Running`.
    pub async fn run<W: Write>(
        &mut self,
        suite: &TestSuite,
        mut reporter: Reporter<W>,
    ) -> Result<RunSummary, HarnessError> {
        if self.state != HarnessState::Idle {
            return Err(HarnessError::AlreadyRun);
        }
        self.transition(HarnessState::Running);
        reporter.banner(&self.candidate)?;

        for case in suite.iter() {
            let outcome = self.run_case(case).await?;
            reporter.record(&case.name, &outcome.verdict)?;
            if let Some(ref log) = self.log {
                let recorded = TestOutcome::new(
                    case.name.as_str(),
                    &outcome.verdict,
                    outcome.reference.exit_code,
                    outcome.candidate.exit_code,
                )
                .with_duration(outcome.elapsed);
                log.record(recorded).map_err(HarnessError::Record)?;
            }
        }

        self.transition(HarnessState::Completed);
        Ok(reporter.finish()?)
    }

    /// Run one case through both programs and compare.
    ///
    /// A candidate that overruns the runner's timeout fails the case; the
    /// same from the reference is an error.
    pub async fn run_case(&self, case: &TestCase) -> Result<CaseOutcome, RunnerError> {
        let span = tracing::debug_span!("case", name = %case.name);
        self.compare(case).instrument(span).await
    }

    async fn compare(&self, case: &TestCase) -> Result<CaseOutcome, RunnerError> {
        let start = Instant::now();

        let reference = self.runner.run(&self.reference, &case.input).await?;
        let (candidate, verdict) = match self.runner.run(&self.candidate, &case.input).await {
            Ok(candidate) => {
                let verdict = evaluate(&reference, &candidate, &case.checks);
                (candidate, verdict)
            }
            Err(RunnerError::Timeout { after, .. }) => {
                tracing::warn!(after_secs = after.as_secs_f64(), "candidate timed out");
                let killed = ExecutionResult::new("", "", KILLED_EXIT);
                (killed, Verdict::Fail(Failure::timed_out(after)))
            }
            Err(e) => return Err(e),
        };

        let elapsed = start.elapsed();
        tracing::debug!(
            passed = verdict.is_pass(),
            elapsed_ms = elapsed.as_millis() as u64,
            "case finished"
        );
        Ok(CaseOutcome {
            verdict,
            reference,
            candidate,
            elapsed,
        })
    }

    fn transition(&mut self, next: HarnessState) {
        tracing::info!(from = ?self.state, to = ?next, "harness state");
        self.state = next;
    }
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
