// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Realtime sync with the todo server's push channel.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Client    │◄────│  Transport  │◄────│    Push     │
//! │ (SyncClient)│     │   (trait)   │     │  endpoint   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   Cache     │  (local mirror of server todos)
//! │ (TodoCache) │
//! └─────────────┘
//! ```
//!
//! # Features
//!
//! - WebSocket connection to the push endpoint
//! - Cache reconciliation from create/update/delete broadcasts
//! - Bounded linear-backoff reconnect, then permanent polling mode
//! - Injectable transport trait for testing

mod cache;
mod client;
mod transport;

pub use cache::TodoCache;
pub use client::{ConnectionState, SyncClient, SyncConfig, SyncError};
pub use transport::{Transport, TransportError, TransportResult, WebSocketTransport};

#[cfg(test)]
mod test_helpers;
