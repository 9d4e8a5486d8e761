// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory todo cache reconciled from push messages.
//!
//! The cache mirrors server state, eventually consistent with it: populated
//! wholesale by the initial fetch (and by polling-mode re-fetches), patched
//! incrementally by push messages while the live channel is up. It is never
//! persisted.
//!
//! Invariant: the cache holds at most one entry per todo id. A `Create` for
//! an id already present replaces that entry rather than appending a
//! duplicate.

use td_core::{PushMessage, Todo};

/// Local cache of todos, ordered as received from the server.
#[derive(Debug, Default)]
pub struct TodoCache {
    todos: Vec<Todo>,
    /// Bumped on every mutation. Poll results are discarded when the
    /// generation changed between fetch start and completion, so a stale
    /// snapshot never overwrites fresher push-derived state.
    generation: u64,
}

impl TodoCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        TodoCache::default()
    }

    /// The current mutation generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The cached todos, in order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Number of cached todos.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Reconcile one push message into the cache.
    ///
    /// - `Create`: insert, replacing any existing entry with the same id
    /// - `Update`: replace in place; ignored when the id is unknown
    /// - `Delete`: remove by id; no-op when absent
    pub fn apply(&mut self, msg: &PushMessage) {
        match msg {
            PushMessage::Create(todo) => {
                match self.todos.iter_mut().find(|t| t.id == todo.id) {
                    Some(existing) => *existing = todo.clone(),
                    None => self.todos.push(todo.clone()),
                }
            }
            PushMessage::Update(todo) => {
                // An update for a todo we never learned about is dropped,
                // not inserted.
                if let Some(existing) = self.todos.iter_mut().find(|t| t.id == todo.id) {
                    *existing = todo.clone();
                }
            }
            PushMessage::Delete(todo) => {
                self.todos.retain(|t| t.id != todo.id);
            }
        }
        self.generation += 1;
    }

    /// Replace the whole cache with a freshly fetched snapshot.
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        self.generation += 1;
    }

    /// Replace the cache only if no mutation happened since `seen_generation`.
    ///
    /// Returns true when the snapshot was applied. Used by the poll loop: the
    /// generation is sampled before the fetch starts, and a snapshot that
    /// raced with a push message loses.
    pub fn replace_all_if_unchanged(&mut self, todos: Vec<Todo>, seen_generation: u64) -> bool {
        if self.generation != seen_generation {
            return false;
        }
        self.replace_all(todos);
        true
    }
}
