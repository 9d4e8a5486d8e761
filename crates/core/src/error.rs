// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for td-core operations.

use thiserror::Error;

/// All possible errors that can occur in td-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("todo not found: {0}")]
    TodoNotFound(i64),

    #[error(
        "invalid status: '{0}'\n  hint: valid statuses are: not_started, in_progress, completed"
    )]
    InvalidStatus(String),

    #[error("invalid role: '{0}'\n  hint: valid roles are: admin, member, viewer")]
    InvalidRole(String),

    #[error("invalid sort field: '{0}'\n  hint: valid fields are: id, name, due_date, status")]
    InvalidSortField(String),

    #[error("invalid sort order: '{0}'\n  hint: valid orders are: asc, desc")]
    InvalidSortOrder(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for td-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
