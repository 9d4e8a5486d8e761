// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

use td_core::{Status, Todo};

/// Create a test todo with the given id and name.
pub fn make_todo(id: i64, name: &str) -> Todo {
    Todo::new(id, name)
}

/// Create a test todo with the given id, name, and status.
pub fn make_todo_with_status(id: i64, name: &str, status: Status) -> Todo {
    let mut todo = Todo::new(id, name);
    todo.status = status;
    todo
}
