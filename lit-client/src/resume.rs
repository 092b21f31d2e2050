//! Resume information persisted between sessions.
//!
//! The front end stores the player id and game code of an active session
//! locally; on startup the client reads them to decide between resuming
//! (a `CONNECT` request) and starting fresh. This module reads that state;
//! it does not own it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use lit_types::{GameCode, PlayerId};

/// Errors reading or writing resume state.
#[derive(Debug, Error)]
pub enum ResumeError {
    /// File access failed.
    #[error("resume file error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored state did not parse.
    #[error("malformed resume file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The locally stored identity of an interrupted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeInfo {
    /// The player id issued when the session was joined.
    pub player_id: PlayerId,
    /// The code of the session to resume.
    pub game_code: GameCode,
}

impl ResumeInfo {
    /// Parse resume state from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ResumeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Serialize resume state to JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>, ResumeError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Load resume state from a file, if one exists.
    ///
    /// A missing file means there is nothing to resume (`Ok(None)`).
    pub fn load(path: &Path) -> Result<Option<Self>, ResumeError> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(Some(Self::from_json(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
