// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the persisted session.

#![allow(clippy::unwrap_used)]

use tempfile::tempdir;

use td_core::User;

use super::Session;
use crate::error::Error;

fn test_user() -> User {
    User {
        id: 1,
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
    }
}

#[test]
fn missing_file_yields_logged_out_session() {
    let dir = tempdir().unwrap();
    let session = Session::load(dir.path()).unwrap();
    assert!(!session.is_logged_in());
    assert!(session.require_token().is_err());
}

#[test]
fn login_save_load_round_trip() {
    let dir = tempdir().unwrap();
    let mut session = Session::default();
    session.login("tok-123".to_string(), test_user());
    session.select_team(Some(4));
    session.save(dir.path()).unwrap();

    let loaded = Session::load(dir.path()).unwrap();
    assert_eq!(loaded.require_token().unwrap(), "tok-123");
    assert_eq!(loaded.user.as_ref().map(|u| u.id), Some(1));
    assert_eq!(loaded.require_team().unwrap(), 4);
}

#[test]
fn clear_removes_the_session() {
    let dir = tempdir().unwrap();
    let mut session = Session::default();
    session.login("tok".to_string(), test_user());
    session.save(dir.path()).unwrap();

    Session::clear(dir.path()).unwrap();
    let loaded = Session::load(dir.path()).unwrap();
    assert_eq!(loaded, Session::default());
}

#[test]
fn clear_is_a_noop_without_a_session() {
    let dir = tempdir().unwrap();
    Session::clear(dir.path()).unwrap();
}

#[test]
fn require_team_errors_without_selection() {
    let session = Session::default();
    assert!(matches!(
        session.require_team(),
        Err(Error::NoTeamSelected)
    ));
}

#[test]
fn select_team_none_clears_selection() {
    let mut session = Session::default();
    session.select_team(Some(2));
    session.select_team(None);
    assert!(session.team_id.is_none());
}
