// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Team membership types and role-based permissions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A team that todos belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
}

/// Role of a user within a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access, including deleting todos and managing members.
    Admin,
    /// Can create, read, and update todos.
    Member,
    /// Read-only access.
    Viewer,
}

/// An action a role may or may not be allowed to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Create,
    Read,
    Update,
    Delete,
}

impl Role {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
            Role::Viewer => "viewer",
        }
    }

    /// Check whether this role allows the given action.
    pub fn allows(&self, perm: Permission) -> bool {
        match self {
            Role::Admin => true,
            Role::Member => matches!(
                perm,
                Permission::Create | Permission::Read | Permission::Update
            ),
            Role::Viewer => perm == Permission::Read,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "member" => Ok(Role::Member),
            "viewer" => Ok(Role::Viewer),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

/// A user's membership in a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTeam {
    pub user_id: i64,
    pub team_id: i64,
    pub role: Role,
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod tests;
