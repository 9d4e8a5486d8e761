// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for CLI error messages.

#![allow(clippy::unwrap_used)]

use super::Error;
use crate::api::ApiError;

#[test]
fn not_logged_in_has_login_hint() {
    let msg = Error::NotLoggedIn.to_string();
    assert!(msg.contains("hint:"));
    assert!(msg.contains("tdc login"));
}

#[test]
fn no_team_selected_has_team_hint() {
    let msg = Error::NoTeamSelected.to_string();
    assert!(msg.contains("tdc teams"));
    assert!(msg.contains("tdc team <id>"));
}

#[test]
fn api_error_is_transparent() {
    let err: Error = ApiError::Status {
        code: 404,
        message: "todo not found".to_string(),
    }
    .into();
    let msg = err.to_string();
    assert!(msg.contains("404"));
    assert!(msg.contains("todo not found"));
}

#[test]
fn core_error_is_transparent() {
    let err: Error = td_core::Error::InvalidStatus("done".to_string()).into();
    assert!(err.to_string().contains("invalid status"));
}
