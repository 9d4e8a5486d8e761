// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Authentication commands: register, login, logout, whoami.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::api::{is_unauthorized, Api, LoginRequest, RegisterRequest};
use crate::error::{Error, Result};
use crate::session::Session;

/// Prompt for a password on stderr and read one line from stdin.
///
/// Passwords never appear on argv, so they stay out of shell history and
/// process listings.
fn read_password(prompt: &str) -> Result<String> {
    eprint!("{}", prompt);
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(Error::InvalidInput("password must not be empty".to_string()));
    }
    Ok(password)
}

/// Register a new account.
pub async fn register(api: &dyn Api, username: &str, email: &str) -> Result<()> {
    let password = read_password("password: ")?;
    let user = api
        .register(RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password,
        })
        .await?;
    println!("registered {} <{}>", user.username, user.email);
    println!("run 'tdc login {}' to sign in", user.email);
    Ok(())
}

/// Log in, persist the session, and show the user's teams.
pub async fn login(api: &dyn Api, session: &mut Session, dir: &Path, email: &str) -> Result<()> {
    let password = read_password("password: ")?;
    let resp = api
        .login(LoginRequest {
            email: email.to_string(),
            password,
        })
        .await?;

    session.login(resp.token.clone(), resp.user.clone());

    // Drop a stale team selection if the user no longer belongs to it
    let teams = api.teams(&resp.token).await?;
    if let Some(team_id) = session.team_id {
        if !teams.iter().any(|t| t.id == team_id) {
            session.select_team(None);
        }
    }
    session.save(dir)?;

    println!("logged in as {}", resp.user.username);
    if teams.is_empty() {
        println!("no teams yet");
    } else {
        println!("teams:");
        for team in &teams {
            println!("  {}  {}", team.id, team.name);
        }
        println!("select one with 'tdc team <id>'");
    }
    Ok(())
}

/// Clear the stored session.
pub fn logout(dir: &Path) -> Result<()> {
    Session::clear(dir)?;
    println!("logged out");
    Ok(())
}

/// Show the signed-in user, verifying the stored token.
pub async fn whoami(api: &dyn Api, session: &Session) -> Result<()> {
    let token = session.require_token()?;
    let user = match api.me(token).await {
        Ok(user) => user,
        Err(e) if is_unauthorized(&e) => return Err(Error::SessionExpired),
        Err(e) => return Err(e.into()),
    };
    println!("{} <{}>", user.username, user.email);
    if let Some(team_id) = session.team_id {
        println!("selected team: {}", team_id);
    }
    Ok(())
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
