// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core todo types shared by the API client and the sync client.
//!
//! This module contains the fundamental data types: Todo, TodoDraft, and
//! Status. Field names and serialized tags match the server's JSON
//! representation exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workflow status of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not yet started. Initial state for new todos.
    NotStarted,
    /// Currently being worked on.
    InProgress,
    /// Successfully finished.
    Completed,
}

impl Status {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "not_started",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::NotStarted
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "not_started" => Ok(Status::NotStarted),
            "in_progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// On the wire an empty status string means the zero value: the server's
/// delete broadcast carries an id-only payload whose other fields are Go
/// zero values, so `""` decodes as the default status rather than failing
/// the whole message.
impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(Status::default());
        }
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

/// A todo record as exchanged with the server.
///
/// The `id` is assigned by the server and unique per todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub team_id: i64,
}

impl Todo {
    /// Creates a todo with the given id and name and default fields.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Todo {
            id,
            name: name.into(),
            description: None,
            due_date: None,
            status: Status::default(),
            priority: 0,
            tags: Vec::new(),
            team_id: 0,
        }
    }
}

/// A partial todo sent as a create or update request body.
///
/// The server assigns the id on create; on update, unset fields keep their
/// current values on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
}

impl TodoDraft {
    /// Creates a draft with the given name and no other fields set.
    pub fn named(name: impl Into<String>) -> Self {
        TodoDraft {
            name: name.into(),
            ..TodoDraft::default()
        }
    }

    /// Builds a draft carrying every field of an existing todo.
    ///
    /// Used by read-modify-write edits: start from the current server state,
    /// overwrite the changed fields, send the whole body back.
    pub fn from_todo(todo: &Todo) -> Self {
        TodoDraft {
            name: todo.name.clone(),
            description: todo.description.clone(),
            due_date: todo.due_date,
            status: Some(todo.status),
            priority: Some(todo.priority),
            tags: todo.tags.clone(),
            team_id: Some(todo.team_id),
        }
    }
}

#[cfg(test)]
#[path = "todo_tests.rs"]
mod tests;
