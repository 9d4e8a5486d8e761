// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface definition.

use clap::{Parser, Subcommand};

use td_core::{SortBy, SortOrder, Status};

use crate::help;

/// tdc: terminal client for the todo/team server
#[derive(Parser, Debug)]
#[command(name = "tdc")]
#[command(about = "Terminal client for the todo server", version)]
#[command(styles = help::styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new account (prompts for a password)
    Register {
        /// Username for the new account
        username: String,
        /// Email address for the new account
        email: String,
    },

    /// Log in and store the session token (prompts for a password)
    Login {
        /// Email address of the account
        email: String,
    },

    /// Clear the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// List the teams you belong to
    Teams,

    /// Select a team (persisted across invocations)
    Team {
        /// Team id to select; omit to clear the selection
        id: Option<i64>,
    },

    /// List todos
    List {
        /// Only show todos with this status
        #[arg(long)]
        status: Option<Status>,
        /// Sort by this field (id, name, due_date, status)
        #[arg(long)]
        sort_by: Option<SortBy>,
        /// Sort direction (asc, desc)
        #[arg(long)]
        order: Option<SortOrder>,
        /// Filter client-side by name/description substring
        #[arg(long)]
        search: Option<String>,
        /// Print the raw JSON instead of the rendered list
        #[arg(long)]
        json: bool,
    },

    /// Create a todo
    New {
        /// Name of the todo
        name: String,
        /// Longer description
        #[arg(long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        due: Option<String>,
        /// Priority (higher is more urgent)
        #[arg(long)]
        priority: Option<i32>,
        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Initial status
        #[arg(long)]
        status: Option<Status>,
    },

    /// Edit a todo's fields
    Edit {
        /// Id of the todo to edit
        id: i64,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New due date (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        due: Option<String>,
        /// New priority
        #[arg(long)]
        priority: Option<i32>,
        /// Replace tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// New status
        #[arg(long)]
        status: Option<Status>,
    },

    /// Mark a todo completed
    Done {
        /// Id of the todo
        id: i64,
    },

    /// Delete a todo
    Delete {
        /// Id of the todo
        id: i64,
    },

    /// Follow live updates, falling back to polling when the push channel
    /// is down
    Watch {
        /// Only show todos with this status
        #[arg(long)]
        status: Option<Status>,
        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}
