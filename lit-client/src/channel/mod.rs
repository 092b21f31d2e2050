//! Channel abstraction for the Literature client.
//!
//! The server speaks over a bidirectional, ordered, named-event connection.
//! This module abstracts that connection so the protocol logic can run
//! against a mock in tests.
//!
//! # Design
//!
//! The channel trait is async and connection-oriented:
//! - `connect()` establishes a connection
//! - `emit()` sends one named event with a JSON payload
//! - `recv()` receives the next named event, in delivery order
//! - `close()` gracefully terminates
//!
//! Delivery is assumed reliable, ordered and at-most-once per message; the
//! client never reorders or retries.

mod mock;

pub use mock::MockChannel;

use async_trait::async_trait;
use thiserror::Error;

use lit_types::NamedEvent;

/// Channel errors.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Connection failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Not connected.
    #[error("not connected")]
    NotConnected,

    /// Connection closed.
    #[error("connection closed")]
    ConnectionClosed,

    /// Emit failed.
    #[error("emit failed: {0}")]
    EmitFailed(String),

    /// Receive failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(String),

    /// Connection timeout.
    #[error("connection timeout")]
    Timeout,
}

/// Trait for sending and receiving named events.
///
/// Implementations handle the underlying connection mechanism
/// (WebSocket, mock, etc).
#[async_trait]
pub trait Channel: Send + Sync {
    /// Connect to the server at the given address.
    async fn connect(&self, address: &str) -> Result<(), ChannelError>;

    /// Emit one named event with a JSON payload.
    async fn emit(&self, event: &str, payload: &[u8]) -> Result<(), ChannelError>;

    /// Receive the next inbound named event.
    ///
    /// Blocks until an event is available or the connection closes.
    /// Events are delivered in the order the server sent them.
    async fn recv(&self) -> Result<NamedEvent, ChannelError>;

    /// Check if currently connected.
    fn is_connected(&self) -> bool;

    /// Close the connection gracefully.
    async fn close(&self) -> Result<(), ChannelError>;
}
