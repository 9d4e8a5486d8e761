// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted login session.
//!
//! The session holds the auth token, the signed-in user, and the selected
//! team. It is stored as JSON at `<config-dir>/tdc/session.json` so the
//! token and team selection survive across invocations, and cleared on
//! logout. Commands construct it on startup and pass it by reference to
//! whatever needs it; there is no global state.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use td_core::User;

use crate::error::{Error, Result};

const SESSION_FILE_NAME: &str = "session.json";

/// The login session for the current user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token from the last successful login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// The signed-in user, cached from the login response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// The selected team, restored across invocations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
}

impl Session {
    /// Load the session from `dir/session.json`.
    ///
    /// A missing file yields an empty (logged-out) session.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(SESSION_FILE_NAME);
        if !path.exists() {
            return Ok(Session::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the session to `dir/session.json`, creating the directory.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(SESSION_FILE_NAME), contents)?;
        Ok(())
    }

    /// Remove the persisted session file (logout).
    pub fn clear(dir: &Path) -> Result<()> {
        let path = dir.join(SESSION_FILE_NAME);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Whether a token is present.
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Returns the stored token, or an error telling the user to log in.
    pub fn require_token(&self) -> Result<&str> {
        self.token.as_deref().ok_or(Error::NotLoggedIn)
    }

    /// Returns the selected team id, or an error telling the user to pick one.
    pub fn require_team(&self) -> Result<i64> {
        self.team_id.ok_or(Error::NoTeamSelected)
    }

    /// Record a successful login.
    pub fn login(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Select a team, or clear the selection with `None`.
    pub fn select_team(&mut self, team_id: Option<i64>) {
        self.team_id = team_id;
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
