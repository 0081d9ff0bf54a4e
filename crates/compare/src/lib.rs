// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result comparison for the shtest shell harness.
//!
//! This crate holds what one shell run leaves behind ([`ExecutionResult`]),
//! the closed vocabulary of checks a test case may request ([`Check`],
//! [`CheckSet`]), and the evaluator that decides whether a candidate run
//! matches the reference run ([`evaluate`]).

mod check;
mod diff;
mod evaluate;
mod result;

pub use check::{Check, CheckSet};
pub use diff::unified_diff;
pub use evaluate::{evaluate, evaluate_all, Failure, Verdict};
pub use result::ExecutionResult;
