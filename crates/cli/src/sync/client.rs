// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Realtime sync client for the push channel.
//!
//! Provides a high-level interface for:
//! - Connecting to the push endpoint
//! - Receiving broadcasts and reconciling them into the local cache
//! - Scheduling bounded reconnection attempts after a drop
//!
//! The client owns the connection state exclusively. Transport failures are
//! logged and treated as a close event, never surfaced to the render loop.

use std::time::Duration;

use td_core::PushMessage;

use super::cache::TodoCache;
use super::transport::{Transport, TransportError, WebSocketTransport};

/// Configuration for the sync client.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// URL of the push endpoint.
    pub url: String,
    /// Maximum consecutive reconnection attempts before giving up.
    pub max_retries: u32,
    /// Base reconnect delay in milliseconds; attempt N waits N times this.
    pub base_delay_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            url: "ws://localhost:8080/ws".to_string(),
            max_retries: 5,
            base_delay_ms: 2000,
        }
    }
}

/// Error type for sync client operations.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Not connected.
    #[error("not connected to push endpoint")]
    NotConnected,
}

/// Result type for sync client operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// State of the push channel connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected.
    Disconnected,
    /// Initial connection attempt in flight.
    Connecting,
    /// Live connection established.
    Connected,
    /// Reconnecting after a drop.
    Reconnecting { attempt: u32 },
}

/// Sync client owning the push connection and the local todo cache.
pub struct SyncClient<T: Transport = WebSocketTransport> {
    /// Configuration.
    config: SyncConfig,
    /// Transport layer.
    transport: T,
    /// Local cache reconciled from broadcasts and poll snapshots.
    cache: TodoCache,
    /// Connection state.
    state: ConnectionState,
    /// Consecutive failed connection attempts. Reset on success.
    failures: u32,
}

impl SyncClient<WebSocketTransport> {
    /// Create a new sync client with the default WebSocket transport.
    pub fn new(config: SyncConfig) -> Self {
        SyncClient::with_transport(config, WebSocketTransport::new())
    }
}

impl<T: Transport> SyncClient<T> {
    /// Create a new sync client with a custom transport (for testing).
    pub fn with_transport(config: SyncConfig, transport: T) -> Self {
        SyncClient {
            config,
            transport,
            cache: TodoCache::new(),
            state: ConnectionState::Disconnected,
            failures: 0,
        }
    }

    /// Get the current connection state.
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Check if connected.
    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected && self.transport.is_connected()
    }

    /// The local cache.
    pub fn cache(&self) -> &TodoCache {
        &self.cache
    }

    /// Mutable access to the local cache (initial fetch, poll snapshots).
    pub fn cache_mut(&mut self) -> &mut TodoCache {
        &mut self.cache
    }

    /// Connect to the push endpoint.
    ///
    /// Idempotent: a call while already connecting or connected is a no-op,
    /// so a bootstrap call and a reconnect timer can never spawn duplicate
    /// connections.
    pub async fn connect(&mut self) -> SyncResult<()> {
        if self.is_connected() || self.state == ConnectionState::Connecting {
            return Ok(());
        }
        self.state = ConnectionState::Connecting;
        self.try_connect().await
    }

    /// Disconnect from the push endpoint.
    pub async fn disconnect(&mut self) -> SyncResult<()> {
        self.transport.disconnect().await?;
        self.state = ConnectionState::Disconnected;
        Ok(())
    }

    /// Delay before the next reconnection attempt, or `None` once the retry
    /// budget is spent and the client stays in polling mode.
    ///
    /// Attempt N waits N times the base delay: 1x, 2x, ... up to
    /// `max_retries` times.
    pub fn next_reconnect_delay(&self) -> Option<Duration> {
        let attempt = self.failures + 1;
        if attempt > self.config.max_retries {
            return None;
        }
        Some(Duration::from_millis(
            self.config.base_delay_ms * u64::from(attempt),
        ))
    }

    /// Attempt to re-establish the connection, consuming one retry on
    /// failure.
    ///
    /// The caller is expected to sleep for [`next_reconnect_delay`] first.
    ///
    /// [`next_reconnect_delay`]: SyncClient::next_reconnect_delay
    pub async fn reconnect(&mut self) -> SyncResult<()> {
        if self.is_connected() {
            return Ok(());
        }
        self.state = ConnectionState::Reconnecting {
            attempt: self.failures + 1,
        };
        self.try_connect().await
    }

    async fn try_connect(&mut self) -> SyncResult<()> {
        match self.transport.connect(&self.config.url).await {
            Ok(()) => {
                self.state = ConnectionState::Connected;
                self.failures = 0;
                Ok(())
            }
            Err(e) => {
                self.state = ConnectionState::Disconnected;
                self.failures += 1;
                Err(e.into())
            }
        }
    }

    /// Receive the next broadcast and reconcile it into the cache.
    ///
    /// Returns the message so the caller can render a notification. `None`
    /// means the connection dropped; transport errors are logged and mapped
    /// to the same close signal.
    pub async fn recv(&mut self) -> SyncResult<Option<PushMessage>> {
        if !self.is_connected() {
            return Err(SyncError::NotConnected);
        }

        match self.transport.recv().await {
            Ok(Some(msg)) => {
                self.cache.apply(&msg);
                Ok(Some(msg))
            }
            Ok(None) => {
                self.state = ConnectionState::Disconnected;
                Ok(None)
            }
            Err(e) => {
                tracing::warn!("push channel error, treating as close: {}", e);
                self.state = ConnectionState::Disconnected;
                Ok(None)
            }
        }
    }
}
