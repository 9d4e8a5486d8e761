// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tdcrs - client library for the `tdc` todo CLI.
//!
//! This crate implements the client side of a small team todo server:
//! authentication, team selection, todo CRUD over the REST API, and a live
//! watch mode that follows the server's WebSocket push channel with a polling
//! fallback.
//!
//! # Main Components
//!
//! - [`api`] - REST client ([`api::Api`] trait plus the [`api::HttpApi`]
//!   implementation)
//! - [`sync`] - push channel client ([`sync::SyncClient`]) and the local
//!   [`sync::TodoCache`] it reconciles
//! - [`Config`] - endpoints and sync tuning, loaded from `config.toml`
//! - [`Session`] - persisted bearer token and team selection
//! - [`Error`] - error types for all operations

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;

pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod sync;

pub use cli::{Cli, Command};
pub use commands::run;
pub use config::Config;
pub use error::{Error, Result};
pub use session::Session;
