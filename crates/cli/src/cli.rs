// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{DEFAULT_REFERENCE, DEFAULT_TESTS_FILE};

/// Differential test harness for shell implementations
#[derive(Parser, Debug, Clone)]
#[command(
    name = "shtest",
    version,
    about = "Run a test suite against a reference shell and a candidate shell and compare"
)]
pub struct Cli {
    /// Path to the shell binary under test
    #[arg(long, value_name = "PATH")]
    pub binary: PathBuf,

    /// YAML file holding the test cases
    #[arg(long, env = "SHTEST_TESTS", default_value = DEFAULT_TESTS_FILE)]
    pub tests: PathBuf,

    /// Reference shell (looked up in PATH unless it is a path)
    #[arg(long, env = "SHTEST_REFERENCE", default_value = DEFAULT_REFERENCE)]
    pub reference: String,

    /// Kill a shell that runs longer than this many seconds (default: no limit)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Only run tests whose name contains this text
    #[arg(long)]
    pub filter: Option<String>,

    /// Reject unknown check names instead of ignoring them
    #[arg(long)]
    pub strict_checks: bool,

    /// Exit with status 1 when any test fails
    #[arg(long)]
    pub exit_code: bool,

    /// Write one JSON line per test outcome to this file
    #[arg(long, value_name = "PATH")]
    pub record: Option<PathBuf>,

    /// When to color OK/KO tags
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorMode,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Tag coloring mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
