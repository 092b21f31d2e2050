//! Outbound turn actions.
//!
//! Requests are fire-and-forget from this client's perspective: the server
//! answers on `game-updates` (or `chat`), and delivery is the transport's
//! concern.

use serde_json::json;

use crate::{Card, GameCode, LitError, PlayerId, Position};

/// An outbound request this client can submit over the channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientRequest {
    /// Create a new game session.
    CreateGame {
        /// Display name of the creating player.
        name: String,
    },
    /// Join an existing session by code.
    JoinGame {
        /// The session to join.
        code: GameCode,
        /// Display name of the joining player.
        name: String,
    },
    /// Leave the current session.
    LeaveGame {
        /// The session being left.
        code: GameCode,
        /// The leaving player.
        player_id: PlayerId,
    },
    /// Start the game (lobby owner only; enforced server-side).
    StartGame {
        /// The session to start.
        code: GameCode,
        /// The requesting player.
        player_id: PlayerId,
    },
    /// Resume a previous session after a disconnect.
    Reconnect {
        /// The session to resume.
        code: GameCode,
        /// The returning player.
        player_id: PlayerId,
    },
    /// Ask an opponent for a specific card.
    AskCard {
        /// The session code.
        code: GameCode,
        /// The asking player's id.
        fid: PlayerId,
        /// The seat being asked.
        target: Position,
        /// The card being asked for.
        card: Card,
    },
    /// Hand the turn to a teammate.
    TransferTurn {
        /// The session code.
        code: GameCode,
        /// The transferring player's id.
        fid: PlayerId,
        /// The seat receiving the turn.
        target: Position,
    },
    /// Declare a full six-card set, grouped by claimed owner.
    PlayDeclare {
        /// The session code.
        code: GameCode,
        /// The declaring player's id.
        fid: PlayerId,
        /// Ordered groups of cards, one group per claimed owner.
        declaration: Vec<Vec<Card>>,
    },
    /// Send a chat message to the table.
    SendChat {
        /// The session code.
        code: GameCode,
        /// The sending player's id.
        fid: PlayerId,
        /// Message body.
        text: String,
    },
}

impl ClientRequest {
    /// The channel event name this request is emitted on.
    pub fn event_name(&self) -> &'static str {
        match self {
            ClientRequest::CreateGame { .. } => "create-game",
            ClientRequest::JoinGame { .. } => "join-game",
            ClientRequest::LeaveGame { .. } => "leave-game",
            ClientRequest::StartGame { .. } => "start-game",
            ClientRequest::Reconnect { .. } => "connect-game",
            ClientRequest::AskCard { .. } => "ask-card",
            ClientRequest::TransferTurn { .. } => "transfer-turn",
            ClientRequest::PlayDeclare { .. } => "play-declare",
            ClientRequest::SendChat { .. } => "chat",
        }
    }

    /// Serialize the request payload to JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, LitError> {
        let value = match self {
            ClientRequest::CreateGame { name } => json!({ "name": name }),
            ClientRequest::JoinGame { code, name } => json!({ "code": code, "name": name }),
            ClientRequest::LeaveGame { code, player_id } => {
                json!({ "code": code, "playerId": player_id })
            }
            ClientRequest::StartGame { code, player_id } => {
                json!({ "code": code, "playerId": player_id })
            }
            ClientRequest::Reconnect { code, player_id } => {
                json!({ "code": code, "playerId": player_id })
            }
            ClientRequest::AskCard {
                code,
                fid,
                target,
                card,
            } => json!({ "code": code, "fid": fid, "target": target, "card": card }),
            ClientRequest::TransferTurn { code, fid, target } => {
                json!({ "code": code, "fid": fid, "target": target })
            }
            ClientRequest::PlayDeclare {
                code,
                fid,
                declaration,
            } => json!({ "code": code, "fid": fid, "declaration": declaration }),
            ClientRequest::SendChat { code, fid, text } => {
                json!({ "code": code, "fid": fid, "text": text })
            }
        };
        serde_json::to_vec(&value).map_err(LitError::Serialization)
    }
}
