//! Error types for the Literature client.

use thiserror::Error;

/// Errors that can occur while encoding or decoding client types.
#[derive(Debug, Error)]
pub enum LitError {
    /// JSON serialization failed
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// JSON deserialization failed
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// Invalid card code
    #[error("invalid card code: {0}")]
    InvalidCard(String),

    /// Invalid player id
    #[error("invalid player id: {0}")]
    InvalidPlayerId(String),

    /// Invalid data format
    #[error("invalid data: {0}")]
    InvalidData(String),
}
