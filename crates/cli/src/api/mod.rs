// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! REST API client for the todo server.
//!
//! Provides a trait-based API layer that enables:
//! - Real HTTP requests for production
//! - Mock implementations for unit testing commands
//!
//! Endpoints covered: `/auth/register`, `/auth/login`, `/auth/me`, `/teams`,
//! and the `/todos` collection and item routes.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use td_core::{ListQuery, Team, Todo, TodoDraft, User};

mod http;

pub use http::{is_unauthorized, HttpApi};

/// Error type for API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server or the response never arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    ///
    /// `message` carries the server's `{"error": ...}` body when present.
    #[error("server error ({code}): {message}")]
    Status { code: u16, message: String },

    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Body of a registration request.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of a login request.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response to a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Boxed future returned by API trait methods.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = ApiResult<T>> + Send + 'a>>;

/// API trait for the todo server's REST surface.
///
/// This trait abstracts over the HTTP layer, allowing commands to be tested
/// against mock implementations.
pub trait Api: Send + Sync {
    /// Register a new user account.
    fn register(&self, req: RegisterRequest) -> ApiFuture<'_, User>;

    /// Exchange credentials for a bearer token.
    fn login(&self, req: LoginRequest) -> ApiFuture<'_, LoginResponse>;

    /// Fetch the user owning the given token.
    fn me(&self, token: &str) -> ApiFuture<'_, User>;

    /// List the teams the token's user belongs to.
    fn teams(&self, token: &str) -> ApiFuture<'_, Vec<Team>>;

    /// Fetch all todos, optionally filtered and sorted.
    fn list_todos(&self, query: ListQuery) -> ApiFuture<'_, Vec<Todo>>;

    /// Create a todo. The server assigns the id.
    fn create_todo(&self, draft: TodoDraft) -> ApiFuture<'_, Todo>;

    /// Replace a todo's fields.
    fn update_todo(&self, id: i64, draft: TodoDraft) -> ApiFuture<'_, Todo>;

    /// Delete a todo by id.
    fn delete_todo(&self, id: i64) -> ApiFuture<'_, ()>;
}

#[cfg(test)]
pub mod api_tests;
