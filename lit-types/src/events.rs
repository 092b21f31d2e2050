//! Inbound channel events.
//!
//! The channel delivers named events with JSON payloads. [`ServerEvent`]
//! parses the five event names this client subscribes to; anything else is
//! not an error, just not ours to handle.

use serde::{Deserialize, Serialize};

use crate::{ChatMessage, GameSession, LitError, Player, PlayerSummary};

/// The status code a response carries on success.
pub const STATUS_OK: u16 = 200;

/// A raw named event as delivered by the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEvent {
    /// The event name (e.g. `game-updates`).
    pub name: String,
    /// The JSON payload bytes.
    pub payload: Vec<u8>,
}

impl NamedEvent {
    /// Create a named event.
    pub fn new(name: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

/// All inbound events this client subscribes to.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// `game-probe`: lobby roster response.
    Probe(ProbeResponse),
    /// `game-updates`: request/response outcome for a turn-level action.
    Updates(UpdateResponse),
    /// `game-data`: full session snapshot.
    GameData(GameDataResponse),
    /// `player-data`: full local-player snapshot.
    PlayerData(PlayerDataResponse),
    /// `chat`: chat delivery or failure.
    Chat(ChatResponse),
}

impl ServerEvent {
    /// Parse a subscribed event from its name and JSON payload.
    ///
    /// Returns `Ok(None)` for event names this client does not subscribe to.
    pub fn from_named(name: &str, payload: &[u8]) -> Result<Option<Self>, LitError> {
        let event = match name {
            "game-probe" => Self::Probe(decode(payload)?),
            "game-updates" => Self::Updates(decode(payload)?),
            "game-data" => Self::GameData(decode(payload)?),
            "player-data" => Self::PlayerData(decode(payload)?),
            "chat" => Self::Chat(decode(payload)?),
            _ => return Ok(None),
        };
        Ok(Some(event))
    }
}

fn decode<'a, T: Deserialize<'a>>(payload: &'a [u8]) -> Result<T, LitError> {
    serde_json::from_slice(payload).map_err(LitError::Deserialization)
}

/// Response to a lobby probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResponse {
    /// Status code; 200 means the roster is present.
    pub code: u16,
    /// The lobby roster.
    #[serde(default)]
    pub data: Vec<PlayerSummary>,
    /// Error description on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of a session-level request, delivered on `game-updates`.
///
/// `kind` is kept as the raw server string so unknown subtypes parse
/// cleanly and can be ignored downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    /// The request subtype (`CREATE`, `JOIN`, `LEAVE`, `START`, `CONNECT`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Status code; 200 means success.
    pub code: u16,
    /// Success payload, shape depending on `kind`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Error description on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpdateResponse {
    /// Interpret the success payload as a session snapshot.
    ///
    /// `CREATE`, `JOIN` and `CONNECT` successes carry one.
    pub fn snapshot(&self) -> Result<SessionSnapshot, LitError> {
        let data = self
            .data
            .clone()
            .ok_or_else(|| LitError::InvalidData(format!("{} success without data", self.kind)))?;
        serde_json::from_value(data).map_err(LitError::Deserialization)
    }

    /// The typed failure payload for a non-200 response.
    pub fn server_error(&self) -> ServerError {
        ServerError {
            code: self.code,
            message: self.error.clone().unwrap_or_default(),
        }
    }
}

/// A full session snapshot: the game plus the local player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The replicated game session.
    pub game: GameSession,
    /// The local player, including hand contents.
    pub player: Player,
}

/// A `game-data` event: unconditional full session overwrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDataResponse {
    /// The replacement session state.
    pub data: GameSession,
}

/// A `player-data` event: unconditional full local-player overwrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDataResponse {
    /// The replacement player state.
    pub data: Player,
}

/// A chat event: message delivery on 200, failure otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Status code; 200 means `data` carries a message.
    pub code: u16,
    /// The delivered message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ChatMessage>,
    /// Error description on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    /// The typed failure payload for a non-200 response.
    pub fn server_error(&self) -> ServerError {
        ServerError {
            code: self.code,
            message: self.error.clone().unwrap_or_default(),
        }
    }
}

/// A protocol failure: a channel event arrived with a non-200 status.
///
/// Surfaced to presentation as session state, never thrown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerError {
    /// The status code the server returned.
    pub code: u16,
    /// The error description, if any.
    pub message: String,
}
