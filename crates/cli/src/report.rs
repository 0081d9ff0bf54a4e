// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run reporting.
//!
//! Prints one status line per test as it completes and a summary block at
//! the end of the run:
//!
//! ```text
//! [ OK ] echo
//! [ KO ] exit status
//! Exited with 0 expected 3
//!
//!
//! Total:
//! [ OK ] 1
//! [ KO ] 1
//! 50.0 % of success
//! ```

use shtest_compare::Verdict;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Test suite is empty: nothing to summarize")]
    EmptySuite,

    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Running totals for one run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
}

impl RunSummary {
    pub fn record(&mut self, passed: bool) {
        self.total += 1;
        if passed {
            self.succeeded += 1;
        }
    }

    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Share of passing tests, unrounded.
    pub fn percentage(&self) -> Result<f64, ReportError> {
        if self.total == 0 {
            return Err(ReportError::EmptySuite);
        }
        Ok(self.succeeded as f64 * 100.0 / self.total as f64)
    }
}

/// Render a status tag, green OK or red KO when `color` is set.
pub fn status_tag(passed: bool, color: bool) -> String {
    let (label, code) = if passed { ("OK", 32) } else { ("KO", 31) };
    if color {
        format!("[ \x1b[{}m{}\x1b[0m ]", code, label)
    } else {
        format!("[ {} ]", label)
    }
}

/// Writes the line-oriented report and accumulates the summary
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
    summary: RunSummary,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            summary: RunSummary::default(),
        }
    }

    /// Announce the program under test
    pub fn banner(&mut self, candidate: impl std::fmt::Display) -> Result<(), ReportError> {
        writeln!(self.out, "Testing {}", candidate)?;
        Ok(())
    }

    /// Record one finished test and print its status line
    pub fn record(&mut self, name: &str, verdict: &Verdict) -> Result<(), ReportError> {
        self.summary.record(verdict.is_pass());
        let tag = status_tag(verdict.is_pass(), self.color);
        match verdict.failure() {
            None => writeln!(self.out, "{} {}", tag, name)?,
            Some(failure) => writeln!(self.out, "{} {}\n{}", tag, name, failure)?,
        }
        Ok(())
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Print the summary block. Fails on an empty run instead of dividing by zero.
    pub fn finish(mut self) -> Result<RunSummary, ReportError> {
        let percentage = self.summary.percentage()?;
        writeln!(self.out, "\nTotal: ")?;
        writeln!(self.out, "{} {}", status_tag(true, self.color), self.summary.succeeded)?;
        writeln!(self.out, "{} {}", status_tag(false, self.color), self.summary.failed())?;
        // Debug formatting keeps the fractional part: 100.0, 66.66666666666667
        writeln!(self.out, "{:?} % of success", percentage)?;
        self.out.flush()?;
        Ok(self.summary)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
