// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process execution.
//!
//! Runs a program with a script on its standard input and captures what it
//! leaves behind. A non-zero exit is an ordinary result; only failing to
//! launch (or overrunning an explicit timeout) is an error.

use async_trait::async_trait;
use shtest_compare::ExecutionResult;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// A program to launch: an absolute path, or a bare name looked up in `PATH`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    path: PathBuf,
}

impl Program {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Errors that abort a run: the harness could not get a result at all
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while running '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' did not finish within {}s", .after.as_secs_f64())]
    Timeout { program: String, after: Duration },
}

/// Executes a program against an input script
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, program: &Program, stdin: &str) -> Result<ExecutionResult, RunnerError>;
}

/// Runs real subprocesses, one at a time
#[derive(Clone, Debug, Default)]
pub struct ShellRunner {
    /// None means wait forever
    timeout: Option<Duration>,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Set a per-process timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl ProcessRunner for ShellRunner {
    async fn run(&self, program: &Program, stdin: &str) -> Result<ExecutionResult, RunnerError> {
        tracing::debug!(%program, input_len = stdin.len(), "spawning");

        let mut child = Command::new(program.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunnerError::Spawn {
                program: program.to_string(),
                source,
            })?;

        // Feed stdin while draining output so neither side blocks on a full pipe
        let input = child.stdin.take();
        let feed = async move {
            if let Some(mut pipe) = input {
                match pipe.write_all(stdin.as_bytes()).await {
                    // The program exited without reading all of its input
                    Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                    other => other?,
                }
                drop(pipe); // EOF
            }
            Ok::<(), std::io::Error>(())
        };
        let run = async move {
            let (fed, output) = tokio::join!(feed, child.wait_with_output());
            fed?;
            output
        };

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, run)
                .await
                .map_err(|_| RunnerError::Timeout {
                    program: program.to_string(),
                    after: limit,
                })?,
            None => run.await,
        }
        .map_err(|source| RunnerError::Io {
            program: program.to_string(),
            source,
        })?;

        let exit_code = exit_code(output.status);
        tracing::debug!(%program, exit_code, "finished");
        Ok(ExecutionResult::from_bytes(
            &output.stdout,
            &output.stderr,
            exit_code,
        ))
    }
}

/// Exit code, or the negated signal number for a killed process
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
