// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::api::ApiError;
use crate::sync::TransportError;

/// All possible errors that can occur in the tdcrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not logged in\n  hint: run 'tdc login <email>' first")]
    NotLoggedIn,

    #[error("session expired or invalid\n  hint: run 'tdc login <email>' to sign in again")]
    SessionExpired,

    #[error("no team selected\n  hint: run 'tdc teams' to list teams, then 'tdc team <id>'")]
    NoTeamSelected,

    #[error("todo not found: {0}")]
    TodoNotFound(i64),

    #[error("config error: {0}")]
    Config(String),

    #[error("config directory not found\n  hint: set HOME so a config directory can be resolved")]
    NoConfigDir,

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Core(#[from] td_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tdcrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
