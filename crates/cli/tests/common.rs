// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Command pointed at an isolated config directory, so tests never touch the
/// developer's real session.
pub fn tdc(config_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("tdc");
    cmd.env("TDC_CONFIG_DIR", config_dir.path());
    cmd.env_remove("NO_COLOR");
    cmd
}

pub fn temp_config_dir() -> TempDir {
    TempDir::new().unwrap()
}
