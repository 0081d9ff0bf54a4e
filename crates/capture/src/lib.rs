// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome recording for shtest runs.
//!
//! Keeps one record per executed test case, in memory and optionally as a
//! JSONL file, so a run can be inspected after the fact.

mod duration_serde;
mod log;
mod outcome;

pub use log::OutcomeLog;
pub use outcome::{OutcomeStatus, RecordedOutcome, TestOutcome};
