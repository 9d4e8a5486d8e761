// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command implementations.
//!
//! Each command builds its inputs (config, session, API client) at the top,
//! does its network calls, and prints through the display module. The session
//! is loaded per invocation and passed by reference; nothing is global.

mod auth;
mod team;
mod todo;
mod watch;

pub use auth::{login, logout, register, whoami};
pub use team::{select_team, teams};
pub use todo::{delete, done, edit, list, new};
pub use watch::watch;

use crate::api::HttpApi;
use crate::cli::Command;
use crate::config::{self, Config};
use crate::error::Result;
use crate::session::Session;

/// Dispatch a parsed command.
pub async fn run(command: Command) -> Result<()> {
    let dir = config::config_dir()?;
    let config = Config::load(&dir)?;
    let mut session = Session::load(&dir)?;
    let api = HttpApi::new(&config.api_base);

    match command {
        Command::Register { username, email } => register(&api, &username, &email).await,
        Command::Login { email } => login(&api, &mut session, &dir, &email).await,
        Command::Logout => logout(&dir),
        Command::Whoami => whoami(&api, &session).await,
        Command::Teams => teams(&api, &session).await,
        Command::Team { id } => select_team(&api, &mut session, &dir, id).await,
        Command::List {
            status,
            sort_by,
            order,
            search,
            json,
        } => list(&api, status, sort_by, order, search.as_deref(), json).await,
        Command::New {
            name,
            description,
            due,
            priority,
            tags,
            status,
        } => {
            new(
                &api,
                &session,
                todo::NewArgs {
                    name,
                    description,
                    due,
                    priority,
                    tags,
                    status,
                },
            )
            .await
        }
        Command::Edit {
            id,
            name,
            description,
            due,
            priority,
            tags,
            status,
        } => {
            edit(
                &api,
                id,
                todo::EditArgs {
                    name,
                    description,
                    due,
                    priority,
                    tags,
                    status,
                },
            )
            .await
        }
        Command::Done { id } => done(&api, id).await,
        Command::Delete { id } => delete(&api, id).await,
        Command::Watch { status, verbose } => watch(&api, &config, status, verbose).await,
    }
}
