// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Push channel messages for server-to-client updates.
//!
//! The push channel is one-directional: the server broadcasts a message for
//! every todo mutation it applies, and clients reconcile the payload into
//! their local cache. The wire shape is `{"type": ..., "payload": ...}` with
//! an optional `timestamp` field the client ignores.

use serde::{Deserialize, Serialize};

use crate::todo::Todo;

/// A mutation broadcast by the server over the push channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum PushMessage {
    /// A todo was created.
    Create(Todo),

    /// A todo was updated. The payload is the full new state.
    Update(Todo),

    /// A todo was deleted. Only the payload's id is meaningful.
    Delete(Todo),
}

impl PushMessage {
    /// Creates a Create message.
    pub fn create(todo: Todo) -> Self {
        PushMessage::Create(todo)
    }

    /// Creates an Update message.
    pub fn update(todo: Todo) -> Self {
        PushMessage::Update(todo)
    }

    /// Creates a Delete message.
    pub fn delete(todo: Todo) -> Self {
        PushMessage::Delete(todo)
    }

    /// The id of the todo this message concerns.
    pub fn todo_id(&self) -> i64 {
        match self {
            PushMessage::Create(t) | PushMessage::Update(t) | PushMessage::Delete(t) => t.id,
        }
    }

    /// Serializes the message to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes the message from JSON.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
