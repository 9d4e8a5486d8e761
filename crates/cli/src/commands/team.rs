// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Team commands: list and select.

use std::path::Path;

use crate::api::Api;
use crate::error::{Error, Result};
use crate::session::Session;

/// List the teams the signed-in user belongs to.
pub async fn teams(api: &dyn Api, session: &Session) -> Result<()> {
    let token = session.require_token()?;
    let teams = api.teams(token).await?;
    if teams.is_empty() {
        println!("no teams");
        return Ok(());
    }
    for team in &teams {
        let marker = if session.team_id == Some(team.id) {
            "*"
        } else {
            " "
        };
        println!("{} {}  {}", marker, team.id, team.name);
    }
    Ok(())
}

/// Select a team by id, or clear the selection when `id` is `None`.
///
/// The id is validated against the user's teams before it is persisted.
pub async fn select_team(
    api: &dyn Api,
    session: &mut Session,
    dir: &Path,
    id: Option<i64>,
) -> Result<()> {
    let token = session.require_token()?;

    match id {
        Some(id) => {
            let teams = api.teams(token).await?;
            let team = teams
                .iter()
                .find(|t| t.id == id)
                .ok_or_else(|| Error::InvalidInput(format!("not a member of team {}", id)))?;
            session.select_team(Some(team.id));
            session.save(dir)?;
            println!("selected team {} ({})", team.id, team.name);
        }
        None => {
            session.select_team(None);
            session.save(dir)?;
            println!("cleared team selection");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod tests;
