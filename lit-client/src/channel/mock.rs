//! Mock channel for testing.
//!
//! Allows queueing inbound events and capturing emitted ones for
//! verification.

use super::{Channel, ChannelError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use lit_types::NamedEvent;

/// Mock channel for testing.
///
/// Allows queueing inbound events and capturing emitted ones for
/// verification.
#[derive(Debug, Default)]
pub struct MockChannel {
    inner: Arc<Mutex<MockChannelInner>>,
}

#[derive(Debug, Default)]
struct MockChannelInner {
    connected: bool,
    connected_address: Option<String>,
    emitted: Vec<NamedEvent>,
    inbound: VecDeque<NamedEvent>,
    fail_next_connect: Option<String>,
    fail_next_emit: Option<String>,
    fail_next_recv: Option<String>,
}

impl MockChannel {
    /// Create a new mock channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an inbound event to be returned by the next `recv()` call.
    pub fn queue_event(&self, name: &str, payload: Vec<u8>) {
        let mut inner = self.inner.lock().unwrap();
        inner.inbound.push_back(NamedEvent::new(name, payload));
    }

    /// Get all events that were emitted.
    pub fn emitted(&self) -> Vec<NamedEvent> {
        let inner = self.inner.lock().unwrap();
        inner.emitted.clone()
    }

    /// Get the last event that was emitted.
    pub fn last_emitted(&self) -> Option<NamedEvent> {
        let inner = self.inner.lock().unwrap();
        inner.emitted.last().cloned()
    }

    /// Get the address that was connected to.
    pub fn connected_address(&self) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner.connected_address.clone()
    }

    /// Cause the next connect() to fail with the given error.
    pub fn fail_next_connect(&self, error: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_next_connect = Some(error.to_string());
    }

    /// Cause the next emit() to fail with the given error.
    pub fn fail_next_emit(&self, error: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_next_emit = Some(error.to_string());
    }

    /// Cause the next recv() to fail with the given error.
    pub fn fail_next_recv(&self, error: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_next_recv = Some(error.to_string());
    }

    /// Clear all state (events, queue, connection).
    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        *inner = MockChannelInner::default();
    }
}

impl Clone for MockChannel {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl Channel for MockChannel {
    async fn connect(&self, address: &str) -> Result<(), ChannelError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(error) = inner.fail_next_connect.take() {
            return Err(ChannelError::ConnectionFailed(error));
        }

        inner.connected = true;
        inner.connected_address = Some(address.to_string());
        Ok(())
    }

    async fn emit(&self, event: &str, payload: &[u8]) -> Result<(), ChannelError> {
        let mut inner = self.inner.lock().unwrap();

        if !inner.connected {
            return Err(ChannelError::NotConnected);
        }

        if let Some(error) = inner.fail_next_emit.take() {
            return Err(ChannelError::EmitFailed(error));
        }

        inner.emitted.push(NamedEvent::new(event, payload.to_vec()));
        Ok(())
    }

    async fn recv(&self) -> Result<NamedEvent, ChannelError> {
        let mut inner = self.inner.lock().unwrap();

        if !inner.connected {
            return Err(ChannelError::NotConnected);
        }

        if let Some(error) = inner.fail_next_recv.take() {
            return Err(ChannelError::ReceiveFailed(error));
        }

        inner.inbound.pop_front().ok_or(ChannelError::ConnectionClosed)
    }

    fn is_connected(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.connected
    }

    async fn close(&self) -> Result<(), ChannelError> {
        let mut inner = self.inner.lock().unwrap();
        inner.connected = false;
        Ok(())
    }
}
