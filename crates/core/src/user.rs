// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User account type.

use serde::{Deserialize, Serialize};

/// A registered user as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
