// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(deprecated)]

//! Command-line flag tests.

mod common;

use assert_cmd::Command;
use common::{broken_candidate, faithful_candidate, write_suite, REFERENCE};
use predicates::prelude::*;
use tempfile::TempDir;

const SUITE: &str = r#"
- name: echo one
  input: "echo one\n"
  checks: [stdout]
- name: echo two
  input: "echo two\n"
  checks: [stdout]
- name: status
  input: "exit 4\n"
  checks: [exitcode]
"#;

fn shtest(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shtest").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("SHTEST_TESTS")
        .env_remove("SHTEST_LOG")
        .args(["--reference", REFERENCE, "--color", "never"]);
    cmd
}

#[test]
fn test_binary_is_required() {
    let dir = TempDir::new().unwrap();
    shtest(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--binary"));
}

#[test]
fn test_help_mentions_flags() {
    let dir = TempDir::new().unwrap();
    shtest(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--strict-checks"))
        .stdout(predicate::str::contains("--exit-code"))
        .stdout(predicate::str::contains("--record"));
}

#[test]
fn test_filter_keeps_matching_cases_in_order() {
    let dir = TempDir::new().unwrap();
    write_suite(dir.path(), SUITE);
    let candidate = faithful_candidate(dir.path());

    shtest(&dir)
        .arg("--binary")
        .arg(&candidate)
        .args(["--filter", "echo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ OK ] echo one\n[ OK ] echo two\n"))
        .stdout(predicate::str::contains("status").not())
        .stdout(predicate::str::contains("[ OK ] 2\n[ KO ] 0\n"));
}

#[test]
fn test_tests_flag_reads_other_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("other.yml");
    std::fs::write(&path, "- name: only\n  input: \"true\\n\"\n").unwrap();
    let candidate = faithful_candidate(dir.path());

    shtest(&dir)
        .arg("--binary")
        .arg(&candidate)
        .arg("--tests")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[ OK ] only\n"));
}

#[test]
fn test_tests_env_var() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("env.yml");
    std::fs::write(&path, "- name: from env\n  input: \"true\\n\"\n").unwrap();
    let candidate = faithful_candidate(dir.path());

    shtest(&dir)
        .env("SHTEST_TESTS", &path)
        .arg("--binary")
        .arg(&candidate)
        .assert()
        .success()
        .stdout(predicate::str::contains("[ OK ] from env\n"));
}

#[test]
fn test_unknown_check_is_inert_by_default() {
    let dir = TempDir::new().unwrap();
    write_suite(
        dir.path(),
        "- name: odd\n  input: \"echo x\\n\"\n  checks: [stdout, colour]\n",
    );
    let candidate = faithful_candidate(dir.path());

    shtest(&dir)
        .arg("--binary")
        .arg(&candidate)
        .assert()
        .success()
        .stdout(predicate::str::contains("[ OK ] odd\n"));
}

#[test]
fn test_strict_checks_rejects_unknown_check() {
    let dir = TempDir::new().unwrap();
    write_suite(
        dir.path(),
        "- name: odd\n  input: \"echo x\\n\"\n  checks: [stdout, colour]\n",
    );
    let candidate = faithful_candidate(dir.path());

    shtest(&dir)
        .arg("--binary")
        .arg(&candidate)
        .arg("--strict-checks")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown check 'colour' in test 'odd'"));
}

#[test]
fn test_record_writes_jsonl() {
    let dir = TempDir::new().unwrap();
    write_suite(dir.path(), SUITE);
    let candidate = broken_candidate(dir.path());
    let record = dir.path().join("outcomes.jsonl");

    shtest(&dir)
        .arg("--binary")
        .arg(&candidate)
        .arg("--record")
        .arg(&record)
        .assert()
        .success();

    let content = std::fs::read_to_string(&record).unwrap();
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["name"], "echo one");
    assert_eq!(lines[0]["status"], "fail");
    assert_eq!(lines[0]["check"], "stdout");
    assert_eq!(lines[2]["name"], "status");
    assert_eq!(lines[2]["reference_exit"], 4);
    assert_eq!(lines[2]["candidate_exit"], 0);
    assert_eq!(lines[0]["seq"], 0);
    assert_eq!(lines[2]["seq"], 2);
}

#[test]
fn test_hanging_candidate_fails_case_and_run_continues() {
    let dir = TempDir::new().unwrap();
    write_suite(
        dir.path(),
        "- name: hang\n  input: \"true\\n\"\n- name: after\n  input: \"echo hi\\n\"\n  checks: [exitcode]\n",
    );
    let candidate = common::write_candidate(dir.path(), "hang", "exec sleep 30\n");

    shtest(&dir)
        .arg("--binary")
        .arg(&candidate)
        .args(["--timeout", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ KO ] hang\nTimed out after 1s\n"))
        .stdout(predicate::str::contains("[ KO ] 2\n"));
}

#[test]
fn test_hanging_reference_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_suite(
        dir.path(),
        "- name: loops\n  input: \"while :; do :; done\\n\"\n",
    );
    let candidate = faithful_candidate(dir.path());

    shtest(&dir)
        .arg("--binary")
        .arg(&candidate)
        .args(["--timeout", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("did not finish within 1s"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let dir = TempDir::new().unwrap();
    let candidate = faithful_candidate(dir.path());

    shtest(&dir)
        .arg("--binary")
        .arg(&candidate)
        .args(["--timeout", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--timeout"));
}
