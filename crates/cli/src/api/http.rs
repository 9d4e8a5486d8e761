// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of the [`Api`] trait using reqwest.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use td_core::{ListQuery, Team, Todo, TodoDraft, User};

use super::{Api, ApiError, ApiFuture, ApiResult, LoginRequest, LoginResponse, RegisterRequest};

/// Shape of the server's error body.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// REST client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base: String,
}

impl HttpApi {
    /// Create a client for the given base URL (e.g. `http://localhost:8080`).
    pub fn new(base: impl Into<String>) -> Self {
        HttpApi {
            client: Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Send a request and decode a JSON body from a success response.
    async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> ApiResult<T> {
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = check_status(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a request and discard the body of a success response.
    async fn send_empty(req: RequestBuilder) -> ApiResult<()> {
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp).await?;
        Ok(())
    }
}

/// Turn a non-success response into `ApiError::Status`.
///
/// The message is the server's `{"error": ...}` field when the body parses,
/// otherwise the canonical reason for the status code.
async fn check_status(resp: Response) -> ApiResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    Err(ApiError::Status {
        code: status.as_u16(),
        message,
    })
}

/// A 401 from `/auth/me` means the stored token is no longer valid.
pub fn is_unauthorized(err: &ApiError) -> bool {
    matches!(
        err,
        ApiError::Status { code, .. } if *code == StatusCode::UNAUTHORIZED.as_u16()
    )
}

impl Api for HttpApi {
    fn register(&self, req: RegisterRequest) -> ApiFuture<'_, User> {
        let builder = self.client.post(self.url("/auth/register")).json(&req);
        Box::pin(Self::send_json(builder))
    }

    fn login(&self, req: LoginRequest) -> ApiFuture<'_, LoginResponse> {
        let builder = self.client.post(self.url("/auth/login")).json(&req);
        Box::pin(Self::send_json(builder))
    }

    fn me(&self, token: &str) -> ApiFuture<'_, User> {
        let builder = self
            .client
            .get(self.url("/auth/me"))
            .bearer_auth(token);
        Box::pin(Self::send_json(builder))
    }

    fn teams(&self, token: &str) -> ApiFuture<'_, Vec<Team>> {
        let builder = self.client.get(self.url("/teams")).bearer_auth(token);
        Box::pin(Self::send_json(builder))
    }

    fn list_todos(&self, query: ListQuery) -> ApiFuture<'_, Vec<Todo>> {
        let builder = self
            .client
            .get(self.url("/todos"))
            .query(&query.to_query_pairs());
        Box::pin(Self::send_json(builder))
    }

    fn create_todo(&self, draft: TodoDraft) -> ApiFuture<'_, Todo> {
        let builder = self.client.post(self.url("/todos")).json(&draft);
        Box::pin(Self::send_json(builder))
    }

    fn update_todo(&self, id: i64, draft: TodoDraft) -> ApiFuture<'_, Todo> {
        let builder = self
            .client
            .put(self.url(&format!("/todos/{}", id)))
            .json(&draft);
        Box::pin(Self::send_json(builder))
    }

    fn delete_todo(&self, id: i64) -> ApiFuture<'_, ()> {
        let builder = self.client.delete(self.url(&format!("/todos/{}", id)));
        Box::pin(Self::send_empty(builder))
    }
}
