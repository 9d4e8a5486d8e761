// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal rendering of the todo list.
//!
//! Rendering is a pure translation from the in-memory todos to a string; the
//! watch loop re-renders the whole visible list after every cache change
//! rather than patching lines in place.

use chrono::{DateTime, Local, Utc};

use td_core::Todo;

use crate::colors;

/// Filter todos by a case-insensitive search term over name and description.
///
/// An empty term matches everything.
pub fn search_filter<'a>(todos: &'a [Todo], term: &str) -> Vec<&'a Todo> {
    let term = term.to_lowercase();
    todos
        .iter()
        .filter(|todo| {
            term.is_empty()
                || todo.name.to_lowercase().contains(&term)
                || todo
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&term))
        })
        .collect()
}

/// Format a due date in the local timezone.
pub fn format_due(due: DateTime<Utc>) -> String {
    due.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Render a single todo as a multi-line card.
pub fn render_todo(todo: &Todo, colorize: bool) -> String {
    let mut out = String::new();

    let name = if colorize {
        colors::header(&todo.name)
    } else {
        todo.name.clone()
    };
    let id = if colorize {
        colors::literal(&format!("#{}", todo.id))
    } else {
        format!("#{}", todo.id)
    };
    out.push_str(&format!(
        "{} {} {}\n",
        id,
        name,
        colors::status_badge(todo.status, colorize)
    ));

    if let Some(desc) = &todo.description {
        let desc = if colorize {
            colors::context(desc)
        } else {
            desc.clone()
        };
        out.push_str(&format!("    {}\n", desc));
    }

    let mut meta = Vec::new();
    if let Some(due) = todo.due_date {
        meta.push(format!("due: {}", format_due(due)));
    }
    if todo.priority != 0 {
        meta.push(format!("priority: {}", todo.priority));
    }
    if !todo.tags.is_empty() {
        meta.push(format!("tags: {}", todo.tags.join(", ")));
    }
    if !meta.is_empty() {
        let line = meta.join("  ");
        let line = if colorize {
            colors::context(&line)
        } else {
            line
        };
        out.push_str(&format!("    {}\n", line));
    }

    out
}

/// Render the visible list, applying the optional search term.
pub fn render_list(todos: &[Todo], search: Option<&str>, colorize: bool) -> String {
    let visible = search_filter(todos, search.unwrap_or(""));
    if visible.is_empty() {
        return "No todos found\n".to_string();
    }
    let mut out = String::new();
    for todo in visible {
        out.push_str(&render_todo(todo, colorize));
    }
    out
}

/// A transient error banner line.
pub fn error_banner(message: &str, colorize: bool) -> String {
    if colorize {
        colors::error(&format!("error: {}", message))
    } else {
        format!("error: {}", message)
    }
}

/// A transient success banner line.
pub fn success_banner(message: &str, colorize: bool) -> String {
    if colorize {
        colors::success(message)
    } else {
        message.to_string()
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
