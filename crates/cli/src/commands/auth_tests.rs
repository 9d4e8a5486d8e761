// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for authentication commands.

#![allow(clippy::unwrap_used)]

use tempfile::tempdir;

use crate::api::api_tests::{MockApi, MOCK_TOKEN};
use crate::api::{Api, RegisterRequest};
use crate::error::Error;
use crate::session::Session;

use super::{logout, whoami};

async fn seeded_api() -> MockApi {
    let api = MockApi::new();
    api.register(RegisterRequest {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "hunter2".to_string(),
    })
    .await
    .unwrap();
    api
}

#[tokio::test]
async fn whoami_requires_login() {
    let api = seeded_api().await;
    let session = Session::default();
    let err = whoami(&api, &session).await.unwrap_err();
    assert!(matches!(err, Error::NotLoggedIn));
}

#[tokio::test]
async fn whoami_with_valid_token_succeeds() {
    let api = seeded_api().await;
    let mut session = Session::default();
    session.token = Some(MOCK_TOKEN.to_string());
    whoami(&api, &session).await.unwrap();
}

#[tokio::test]
async fn whoami_with_stale_token_reports_expired_session() {
    let api = seeded_api().await;
    let mut session = Session::default();
    session.token = Some("stale-token".to_string());
    let err = whoami(&api, &session).await.unwrap_err();
    assert!(matches!(err, Error::SessionExpired));
}

#[test]
fn logout_clears_the_session_file() {
    let dir = tempdir().unwrap();
    let mut session = Session::default();
    session.token = Some("tok".to_string());
    session.save(dir.path()).unwrap();

    logout(dir.path()).unwrap();
    assert!(!Session::load(dir.path()).unwrap().is_logged_in());
}
