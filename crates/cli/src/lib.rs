// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Differential shell test harness.
//!
//! Feeds each test script to a reference shell and to a candidate shell,
//! then compares stdout, stderr and exit code under the checks each test
//! requests. Test cases come from a YAML file (see [`suite`]); results are
//! printed as one OK/KO line per test followed by a summary (see [`report`]).

pub mod app;
pub mod cli;
pub mod config;
pub mod harness;
pub mod logging;
pub mod output_diagnostic;
pub mod report;
pub mod runner;
pub mod suite;

pub use harness::{Harness, HarnessError, HarnessState};
pub use report::{Reporter, RunSummary};
pub use runner::{ProcessRunner, Program, RunnerError, ShellRunner};
pub use suite::{CheckPolicy, SuiteError, TestCase, TestSuite};
