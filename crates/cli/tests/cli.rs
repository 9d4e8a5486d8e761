// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI surface tests: argument parsing, config isolation, and the offline
//! commands that never touch the server.

mod common;
use common::*;

#[test]
fn help_lists_commands() {
    let dir = temp_config_dir();
    tdc(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("login"));
}

#[test]
fn whoami_without_session_fails() {
    let dir = temp_config_dir();
    tdc(&dir)
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in"));
}

#[test]
fn logout_without_session_succeeds() {
    let dir = temp_config_dir();
    tdc(&dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("logged out"));
}

#[test]
fn invalid_status_is_rejected_at_parse_time() {
    let dir = temp_config_dir();
    tdc(&dir)
        .arg("list")
        .arg("--status")
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn list_reports_unreachable_server() {
    let dir = temp_config_dir();
    // Port 1 is never listening; the command must fail with a network error
    // rather than hang or panic
    std::fs::write(
        dir.path().join("config.toml"),
        "api_base = \"http://127.0.0.1:1\"\n",
    )
    .unwrap();
    tdc(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("network error"));
}

#[test]
fn malformed_config_is_reported() {
    let dir = temp_config_dir();
    std::fs::write(dir.path().join("config.toml"), "api_base = [not toml").unwrap();
    tdc(&dir)
        .arg("logout")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}
