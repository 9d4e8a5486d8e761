// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The watch command: follow live updates with a polling fallback.
//!
//! Two independent, uncoordinated timers drive the loop:
//! - the poll interval fires on its fixed schedule regardless of connection
//!   state (it does nothing while the live channel is up)
//! - the reconnect timer sleeps the client's backoff delay, attempts one
//!   reconnect, and reschedules itself on failure until the retry budget is
//!   spent
//!
//! Every cache change re-renders the whole visible list.

use std::time::Duration;

use tokio::time::{sleep_until, Instant, MissedTickBehavior};

use td_core::{ListQuery, PushMessage, Status};

use crate::api::Api;
use crate::colors;
use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::sync::{ConnectionState, SyncClient, SyncConfig, Transport};

/// Result of one poll tick.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PollOutcome {
    /// The live channel is up; polling is suppressed.
    SuppressedLive,
    /// The fetched snapshot replaced the cache.
    Applied,
    /// A push message raced the fetch; the stale snapshot was discarded.
    Stale,
    /// The fetch failed; the error is shown, not retried.
    Failed(String),
}

/// Perform one poll tick: full re-fetch unless the live channel is up.
pub(crate) async fn poll_tick<T: Transport>(
    api: &dyn Api,
    client: &mut SyncClient<T>,
    query: ListQuery,
) -> PollOutcome {
    if client.is_connected() {
        return PollOutcome::SuppressedLive;
    }
    // Sample the generation before the fetch; a push landing while the
    // request is in flight invalidates the snapshot.
    let seen = client.cache().generation();
    match api.list_todos(query).await {
        Ok(todos) => {
            if client.cache_mut().replace_all_if_unchanged(todos, seen) {
                PollOutcome::Applied
            } else {
                PollOutcome::Stale
            }
        }
        Err(e) => PollOutcome::Failed(e.to_string()),
    }
}

/// Transient banner text for a broadcast, mirroring what changed.
fn banner_for(msg: &PushMessage) -> String {
    match msg {
        PushMessage::Create(todo) => format!("new todo: {}", todo.name),
        PushMessage::Update(todo) => format!("todo updated: {}", todo.name),
        PushMessage::Delete(_) => "todo deleted".to_string(),
    }
}

/// Re-render the status line and the whole list.
fn render<T: Transport>(client: &SyncClient<T>, banner: Option<&str>, colorize: bool) {
    if colorize {
        // Clear screen and home the cursor
        print!("\x1b[2J\x1b[H");
    }
    let status_line = match client.state() {
        ConnectionState::Connected => "● connected (live updates)".to_string(),
        ConnectionState::Connecting => "○ connecting...".to_string(),
        ConnectionState::Reconnecting { attempt } => {
            format!("○ reconnecting (attempt {})", attempt)
        }
        ConnectionState::Disconnected => "○ disconnected (polling mode)".to_string(),
    };
    if colorize {
        println!("{}", colors::context(&status_line));
    } else {
        println!("{}", status_line);
    }
    if let Some(banner) = banner {
        println!("{}", display::success_banner(banner, colorize));
    }
    print!(
        "{}",
        display::render_list(client.cache().todos(), None, colorize)
    );
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Deadline for the next reconnect attempt, if the budget allows one.
fn reconnect_deadline<T: Transport>(client: &SyncClient<T>) -> Option<Instant> {
    match client.next_reconnect_delay() {
        Some(delay) => Some(Instant::now() + delay),
        None => {
            tracing::warn!("reconnect budget spent, staying in polling mode");
            None
        }
    }
}

/// Follow live updates until interrupted.
pub async fn watch(
    api: &dyn Api,
    config: &Config,
    status: Option<Status>,
    verbose: bool,
) -> Result<()> {
    init_logging(verbose);

    let query = ListQuery {
        status,
        ..ListQuery::default()
    };
    let sync_config = SyncConfig {
        url: config.ws_url.clone(),
        max_retries: config.sync.max_retries,
        base_delay_ms: config.sync.base_delay_ms,
    };
    let mut client = SyncClient::new(sync_config);
    let colorize = colors::should_colorize();

    // Populate the cache wholesale before anything renders
    match api.list_todos(query).await {
        Ok(todos) => client.cache_mut().replace_all(todos),
        Err(e) => println!(
            "{}",
            display::error_banner(&format!("failed to load todos: {}", e), colorize)
        ),
    }

    if let Err(e) = client.connect().await {
        tracing::warn!("initial connect failed: {}", e);
    }
    let mut next_attempt_at = if client.is_connected() {
        None
    } else {
        reconnect_deadline(&client)
    };
    render(&client, None, colorize);

    let mut poll = tokio::time::interval(Duration::from_secs(config.sync.poll_interval_secs));
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first interval tick fires immediately; the initial fetch already
    // happened, so push it out one period.
    poll.reset();

    loop {
        let reconnect_pending = next_attempt_at.is_some();
        let attempt_at = next_attempt_at.unwrap_or_else(|| {
            // Disabled branch below; the deadline is never awaited
            Instant::now() + Duration::from_secs(3600)
        });

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                let _ = client.disconnect().await;
                return Ok(());
            }

            msg = client.recv(), if client.is_connected() => {
                match msg {
                    Ok(Some(msg)) => {
                        let banner = banner_for(&msg);
                        render(&client, Some(&banner), colorize);
                    }
                    Ok(None) | Err(_) => {
                        next_attempt_at = reconnect_deadline(&client);
                        render(&client, Some("connection lost"), colorize);
                    }
                }
            }

            _ = poll.tick() => {
                match poll_tick(api, &mut client, query).await {
                    PollOutcome::SuppressedLive => {}
                    PollOutcome::Applied => render(&client, None, colorize),
                    PollOutcome::Stale => {
                        tracing::debug!("discarded stale poll snapshot");
                    }
                    PollOutcome::Failed(e) => println!(
                        "{}",
                        display::error_banner(&format!("failed to load todos: {}", e), colorize)
                    ),
                }
            }

            _ = sleep_until(attempt_at), if reconnect_pending => {
                next_attempt_at = None;
                match client.reconnect().await {
                    Ok(()) => render(&client, Some("reconnected"), colorize),
                    Err(e) => {
                        tracing::debug!("reconnect failed: {}", e);
                        next_attempt_at = reconnect_deadline(&client);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
