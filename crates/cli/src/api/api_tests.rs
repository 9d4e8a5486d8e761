// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the API layer, plus the mock implementation shared by command
//! tests.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use td_core::{ListQuery, Team, Todo, TodoDraft, User};

use super::{Api, ApiError, ApiFuture, LoginRequest, LoginResponse, RegisterRequest};

/// In-memory API for testing without a server.
pub struct MockApi {
    users: Mutex<Vec<(User, String)>>,
    todos: Mutex<Vec<Todo>>,
    teams: Vec<Team>,
    next_id: AtomicI64,
    /// When set, every call fails with a network error.
    offline: AtomicBool,
}

pub const MOCK_TOKEN: &str = "mock-token";

impl MockApi {
    pub fn new() -> Self {
        MockApi {
            users: Mutex::new(Vec::new()),
            todos: Mutex::new(Vec::new()),
            teams: vec![
                Team {
                    id: 1,
                    name: "platform".to_string(),
                },
                Team {
                    id: 2,
                    name: "design".to_string(),
                },
            ],
            next_id: AtomicI64::new(1),
            offline: AtomicBool::new(false),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn seed_todo(&self, todo: Todo) {
        self.todos.lock().unwrap().push(todo);
    }

    pub fn todos_snapshot(&self) -> Vec<Todo> {
        self.todos.lock().unwrap().clone()
    }

    fn check_online(&self) -> Result<(), ApiError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(ApiError::Network("mock offline".to_string()))
        } else {
            Ok(())
        }
    }

    fn apply_draft(todo: &mut Todo, draft: &TodoDraft) {
        todo.name = draft.name.clone();
        todo.description = draft.description.clone();
        todo.due_date = draft.due_date;
        if let Some(status) = draft.status {
            todo.status = status;
        }
        if let Some(priority) = draft.priority {
            todo.priority = priority;
        }
        todo.tags = draft.tags.clone();
        if let Some(team_id) = draft.team_id {
            todo.team_id = team_id;
        }
    }
}

impl Api for MockApi {
    fn register(&self, req: RegisterRequest) -> ApiFuture<'_, User> {
        Box::pin(async move {
            self.check_online()?;
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|(u, _)| u.email == req.email) {
                return Err(ApiError::Status {
                    code: 400,
                    message: "email already registered".to_string(),
                });
            }
            let user = User {
                id: users.len() as i64 + 1,
                username: req.username,
                email: req.email,
            };
            users.push((user.clone(), req.password));
            Ok(user)
        })
    }

    fn login(&self, req: LoginRequest) -> ApiFuture<'_, LoginResponse> {
        Box::pin(async move {
            self.check_online()?;
            let users = self.users.lock().unwrap();
            match users
                .iter()
                .find(|(u, pw)| u.email == req.email && *pw == req.password)
            {
                Some((user, _)) => Ok(LoginResponse {
                    token: MOCK_TOKEN.to_string(),
                    user: user.clone(),
                }),
                None => Err(ApiError::Status {
                    code: 401,
                    message: "invalid credentials".to_string(),
                }),
            }
        })
    }

    fn me(&self, token: &str) -> ApiFuture<'_, User> {
        let token = token.to_string();
        Box::pin(async move {
            self.check_online()?;
            if token != MOCK_TOKEN {
                return Err(ApiError::Status {
                    code: 401,
                    message: "invalid token".to_string(),
                });
            }
            let users = self.users.lock().unwrap();
            users
                .first()
                .map(|(u, _)| u.clone())
                .ok_or(ApiError::Status {
                    code: 401,
                    message: "invalid token".to_string(),
                })
        })
    }

    fn teams(&self, token: &str) -> ApiFuture<'_, Vec<Team>> {
        let token = token.to_string();
        Box::pin(async move {
            self.check_online()?;
            if token != MOCK_TOKEN {
                return Err(ApiError::Status {
                    code: 401,
                    message: "invalid token".to_string(),
                });
            }
            Ok(self.teams.clone())
        })
    }

    fn list_todos(&self, query: ListQuery) -> ApiFuture<'_, Vec<Todo>> {
        Box::pin(async move {
            self.check_online()?;
            let todos = self.todos.lock().unwrap();
            Ok(todos
                .iter()
                .filter(|t| query.status.is_none_or(|s| t.status == s))
                .cloned()
                .collect())
        })
    }

    fn create_todo(&self, draft: TodoDraft) -> ApiFuture<'_, Todo> {
        Box::pin(async move {
            self.check_online()?;
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let mut todo = Todo::new(id, "");
            Self::apply_draft(&mut todo, &draft);
            self.todos.lock().unwrap().push(todo.clone());
            Ok(todo)
        })
    }

    fn update_todo(&self, id: i64, draft: TodoDraft) -> ApiFuture<'_, Todo> {
        Box::pin(async move {
            self.check_online()?;
            let mut todos = self.todos.lock().unwrap();
            match todos.iter_mut().find(|t| t.id == id) {
                Some(todo) => {
                    Self::apply_draft(todo, &draft);
                    Ok(todo.clone())
                }
                None => Err(ApiError::Status {
                    code: 404,
                    message: "todo not found".to_string(),
                }),
            }
        })
    }

    fn delete_todo(&self, id: i64) -> ApiFuture<'_, ()> {
        Box::pin(async move {
            self.check_online()?;
            let mut todos = self.todos.lock().unwrap();
            let before = todos.len();
            todos.retain(|t| t.id != id);
            if todos.len() == before {
                return Err(ApiError::Status {
                    code: 404,
                    message: "todo not found".to_string(),
                });
            }
            Ok(())
        })
    }
}

#[tokio::test]
async fn register_then_login_round_trip() {
    let api = MockApi::new();
    let user = api
        .register(RegisterRequest {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user.username, "ada");

    let resp = api
        .login(LoginRequest {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(resp.token, MOCK_TOKEN);
    assert_eq!(resp.user.id, user.id);
}

#[tokio::test]
async fn login_with_bad_password_is_401() {
    let api = MockApi::new();
    api.register(RegisterRequest {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "hunter2".to_string(),
    })
    .await
    .unwrap();

    let err = api
        .login(LoginRequest {
            email: "ada@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status { code: 401, .. }));
}

#[tokio::test]
async fn crud_cycle_through_mock() {
    let api = MockApi::new();
    let created = api.create_todo(TodoDraft::named("Buy milk")).await.unwrap();
    assert_eq!(created.name, "Buy milk");

    let mut draft = TodoDraft::from_todo(&created);
    draft.priority = Some(2);
    let updated = api.update_todo(created.id, draft).await.unwrap();
    assert_eq!(updated.priority, 2);

    api.delete_todo(created.id).await.unwrap();
    assert!(api.todos_snapshot().is_empty());
}

#[tokio::test]
async fn update_missing_todo_is_404() {
    let api = MockApi::new();
    let err = api
        .update_todo(99, TodoDraft::named("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status { code: 404, .. }));
}

#[tokio::test]
async fn offline_mock_fails_with_network_error() {
    let api = MockApi::new();
    api.set_offline(true);
    let err = api.list_todos(ListQuery::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn status_error_message_includes_server_text() {
    let err = ApiError::Status {
        code: 400,
        message: "name is required".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("400"));
    assert!(msg.contains("name is required"));
}

#[test]
fn unauthorized_detection() {
    use super::is_unauthorized;
    let unauth = ApiError::Status {
        code: 401,
        message: "invalid token".to_string(),
    };
    let other = ApiError::Network("down".to_string());
    assert!(is_unauthorized(&unauth));
    assert!(!is_unauthorized(&other));
}
