// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome log implementation.

use crate::outcome::{RecordedOutcome, TestOutcome};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// Log of test outcomes for one run
pub struct OutcomeLog {
    start: Instant,
    outcomes: Arc<Mutex<Vec<RecordedOutcome>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl OutcomeLog {
    /// Create a new in-memory outcome log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            outcomes: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create an outcome log that also writes to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            start: Instant::now(),
            outcomes: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record an outcome, appending it to the file if one is configured.
    pub fn record(&self, outcome: TestOutcome) -> std::io::Result<()> {
        let mut outcomes = self.outcomes.lock();
        let record = RecordedOutcome {
            seq: outcomes.len() as u64,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            outcome,
        };

        if let Some(ref writer) = self.file_writer {
            let json = serde_json::to_string(&record)?;
            let mut w = writer.lock();
            writeln!(w, "{}", json)?;
            w.flush()?;
        }

        outcomes.push(record);
        Ok(())
    }

    /// Get all recorded outcomes
    pub fn outcomes(&self) -> Vec<RecordedOutcome> {
        self.outcomes.lock().clone()
    }

    /// Find outcomes that failed
    pub fn failures(&self) -> Vec<RecordedOutcome> {
        self.outcomes
            .lock()
            .iter()
            .filter(|r| !r.outcome.passed())
            .cloned()
            .collect()
    }

    /// Find outcomes by test name
    pub fn find_by_name(&self, name: &str) -> Vec<RecordedOutcome> {
        self.outcomes
            .lock()
            .iter()
            .filter(|r| r.outcome.name == name)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.outcomes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.lock().is_empty()
    }
}

impl Default for OutcomeLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for OutcomeLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            outcomes: Arc::clone(&self.outcomes),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
