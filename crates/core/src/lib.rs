// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! td-core: Shared library for the tdc todo client
//!
//! This crate provides the data types exchanged with the todo server: the
//! todo entity itself, users and teams, the push channel message format, and
//! the collection query parameters.

pub mod error;
pub mod protocol;
pub mod query;
pub mod team;
pub mod todo;
pub mod user;

pub use error::{Error, Result};
pub use protocol::PushMessage;
pub use query::{ListQuery, SortBy, SortOrder};
pub use team::{Permission, Role, Team, UserTeam};
pub use todo::{Status, Todo, TodoDraft};
pub use user::User;
