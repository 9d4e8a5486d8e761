// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Todo CRUD commands.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use td_core::{ListQuery, SortBy, SortOrder, Status, TodoDraft};

use crate::api::Api;
use crate::colors;
use crate::display;
use crate::error::{Error, Result};
use crate::session::Session;

/// Arguments for `tdc new`.
pub struct NewArgs {
    pub name: String,
    pub description: Option<String>,
    pub due: Option<String>,
    pub priority: Option<i32>,
    pub tags: Vec<String>,
    pub status: Option<Status>,
}

/// Arguments for `tdc edit`.
pub struct EditArgs {
    pub name: Option<String>,
    pub description: Option<String>,
    pub due: Option<String>,
    pub priority: Option<i32>,
    pub tags: Vec<String>,
    pub status: Option<Status>,
}

/// Parse a due date given as `YYYY-MM-DD` (midnight UTC) or RFC 3339.
pub fn parse_due(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    Err(Error::InvalidInput(format!(
        "invalid due date: '{}'\n  hint: use YYYY-MM-DD or an RFC 3339 timestamp",
        s
    )))
}

/// List todos, rendered or as raw JSON.
pub async fn list(
    api: &dyn Api,
    status: Option<Status>,
    sort_by: Option<SortBy>,
    order: Option<SortOrder>,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let query = ListQuery {
        status,
        sort_by,
        order,
    };
    let todos = api.list_todos(query).await?;

    if json {
        let visible = display::search_filter(&todos, search.unwrap_or(""));
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    print!(
        "{}",
        display::render_list(&todos, search, colors::should_colorize())
    );
    Ok(())
}

/// Create a todo.
pub async fn new(api: &dyn Api, session: &Session, args: NewArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        return Err(Error::InvalidInput("todo name is required".to_string()));
    }
    // Every todo belongs to a team, so creation needs a selection
    let team_id = session.require_team()?;

    let mut draft = TodoDraft::named(args.name.trim());
    draft.description = args.description;
    draft.due_date = args.due.as_deref().map(parse_due).transpose()?;
    draft.priority = args.priority;
    draft.tags = args.tags;
    draft.status = args.status;
    draft.team_id = Some(team_id);

    let created = api.create_todo(draft).await?;
    println!("created #{} {}", created.id, created.name);
    Ok(())
}

/// Edit a todo: fetch current state, overlay the changed fields, send back.
pub async fn edit(api: &dyn Api, id: i64, args: EditArgs) -> Result<()> {
    let todos = api.list_todos(ListQuery::default()).await?;
    let current = todos
        .iter()
        .find(|t| t.id == id)
        .ok_or(Error::TodoNotFound(id))?;

    let mut draft = TodoDraft::from_todo(current);
    if let Some(name) = args.name {
        draft.name = name;
    }
    if let Some(description) = args.description {
        draft.description = Some(description);
    }
    if let Some(due) = args.due.as_deref() {
        draft.due_date = Some(parse_due(due)?);
    }
    if let Some(priority) = args.priority {
        draft.priority = Some(priority);
    }
    if !args.tags.is_empty() {
        draft.tags = args.tags;
    }
    if let Some(status) = args.status {
        draft.status = Some(status);
    }

    let updated = api.update_todo(id, draft).await?;
    println!("updated #{} {}", updated.id, updated.name);
    Ok(())
}

/// Mark a todo completed.
pub async fn done(api: &dyn Api, id: i64) -> Result<()> {
    edit(
        api,
        id,
        EditArgs {
            name: None,
            description: None,
            due: None,
            priority: None,
            tags: Vec::new(),
            status: Some(Status::Completed),
        },
    )
    .await
}

/// Delete a todo by id.
pub async fn delete(api: &dyn Api, id: i64) -> Result<()> {
    api.delete_todo(id).await?;
    println!("deleted #{}", id);
    Ok(())
}

#[cfg(test)]
#[path = "todo_tests.rs"]
mod tests;
