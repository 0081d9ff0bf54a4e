// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for shtest integration tests.
//!
//! Every test uses `/bin/sh` as the reference shell so the suite does not
//! depend on `dash` being installed.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub const REFERENCE: &str = "/bin/sh";

/// Path to the shtest binary
pub fn shtest_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_shtest"))
}

/// Write `tests.yml` into `dir`
pub fn write_suite(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("tests.yml");
    std::fs::write(&path, content).unwrap();
    path
}

/// Write an executable shell script into `dir`
pub fn write_candidate(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A candidate that behaves exactly like the reference
pub fn faithful_candidate(dir: &Path) -> PathBuf {
    write_candidate(dir, "faithful", "exec /bin/sh \"$@\"\n")
}

/// A candidate that ignores its input, prints `wrong` and exits 0
pub fn broken_candidate(dir: &Path) -> PathBuf {
    write_candidate(dir, "broken", "cat >/dev/null\necho wrong\n")
}

/// shtest command running in `dir` with `/bin/sh` as reference
pub fn shtest(dir: &Path) -> Command {
    let mut cmd = Command::new(shtest_bin());
    cmd.current_dir(dir)
        .env_remove("SHTEST_TESTS")
        .env_remove("SHTEST_LOG")
        .env("SHTEST_REFERENCE", REFERENCE)
        .arg("--color")
        .arg("never");
    cmd
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
