// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded outcome data types.

use crate::duration_serde;
use serde::{Deserialize, Serialize};
use shtest_compare::{Check, Verdict};
use std::time::{Duration, SystemTime};

/// Pass or fail, as written to the log
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Pass,
    Fail,
}

/// What the harness knows about one finished test case
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub name: String,
    pub status: OutcomeStatus,

    /// First failing check, if any
    pub check: Option<Check>,

    /// Failure explanation, if any
    pub reason: Option<String>,

    pub reference_exit: i32,
    pub candidate_exit: i32,

    /// Time spent running both programs
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

impl TestOutcome {
    pub fn new(
        name: impl Into<String>,
        verdict: &Verdict,
        reference_exit: i32,
        candidate_exit: i32,
    ) -> Self {
        let (status, check, reason) = match verdict {
            Verdict::Pass => (OutcomeStatus::Pass, None, None),
            Verdict::Fail(failure) => (
                OutcomeStatus::Fail,
                failure.check,
                Some(failure.reason.clone()),
            ),
        };
        Self {
            name: name.into(),
            status,
            check,
            reason,
            reference_exit,
            candidate_exit,
            duration: Duration::ZERO,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn passed(&self) -> bool {
        self.status == OutcomeStatus::Pass
    }
}

/// A [`TestOutcome`] stamped with its position and timing in the run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordedOutcome {
    /// Sequence number
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since the log was created
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,

    #[serde(flatten)]
    pub outcome: TestOutcome,
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
