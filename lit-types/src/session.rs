//! Session data model: the client-visible game and player state.
//!
//! [`GameSession`] and the local [`Player`] are owned by the session store
//! for the lifetime of a session and replaced wholesale by server snapshots.
//! Other players' hands are never revealed: [`PlayerRef`] carries only a
//! card count.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, GameCode, PlayerId, Position, Team};

/// The local player, with the authoritative hand contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Server-issued identifier.
    pub id: PlayerId,
    /// Fixed seat index.
    pub position: Position,
    /// Sets captured by this player.
    pub score: u32,
    /// The cards currently held. Authoritative only for the local player.
    pub hand: Vec<Card>,
    /// Whether the player is currently connected.
    pub connected: bool,
}

/// Another player at the table, as visible to the local client.
///
/// Hand contents are never revealed; only the count is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRef {
    /// Server-issued identifier.
    pub id: PlayerId,
    /// Fixed seat index.
    pub position: Position,
    /// Sets captured by this player.
    pub score: u32,
    /// Number of cards held.
    pub card_count: u8,
    /// Whether the player is currently connected.
    pub connected: bool,
}

/// A roster entry from a lobby probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    /// Server-issued identifier.
    pub id: PlayerId,
    /// Fixed seat index.
    pub position: Position,
    /// Whether the player is currently connected.
    pub connected: bool,
}

/// One game session, as replicated from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    /// The shareable session code.
    pub code: GameCode,
    /// The player who created the session.
    pub owner: PlayerId,
    /// False while in the lobby, true once the game has started.
    pub is_active: bool,
    /// Minimum player count required to start.
    pub min_players: u8,
    /// The seat whose action is expected next.
    pub current_turn: Position,
    /// All players at the table (counts only, no hand contents).
    pub players: Vec<PlayerRef>,
    /// Server-issued log entries, most recent first.
    pub logs: Vec<LogEntry>,
}

impl GameSession {
    /// Total score of the given team.
    pub fn team_score(&self, team: Team) -> u32 {
        self.players
            .iter()
            .filter(|p| p.position.team() == team)
            .map(|p| p.score)
            .sum()
    }

    /// Look up a player by seat.
    pub fn player_at(&self, position: Position) -> Option<&PlayerRef> {
        self.players.iter().find(|p| p.position == position)
    }

    /// The most recent log entry, if any.
    pub fn latest_log(&self) -> Option<&LogEntry> {
        self.logs.first()
    }
}

/// An opaque server-issued log record.
///
/// The first whitespace-separated token is the entry's title; the rest is
/// the message. The distinguished title `GameOver` carries the winning
/// team id as its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry(String);

/// The title of the terminal log entry.
pub const GAME_OVER_TITLE: &str = "GameOver";

impl LogEntry {
    /// Create a log entry from its raw server form.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw entry text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the entry into title and message.
    pub fn parsed(&self) -> ParsedLog<'_> {
        match self.0.split_once(' ') {
            Some((title, message)) => ParsedLog { title, message },
            None => ParsedLog {
                title: &self.0,
                message: "",
            },
        }
    }

    /// The winning team, if this is a `GameOver` entry.
    pub fn winning_team(&self) -> Option<Team> {
        let parsed = self.parsed();
        if parsed.title != GAME_OVER_TITLE {
            return None;
        }
        parsed.message.trim().parse::<u8>().ok().and_then(Team::from_id)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A log entry split into its title token and message remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLog<'a> {
    /// The first token, used as the event title/type.
    pub title: &'a str,
    /// Everything after the title.
    pub message: &'a str,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Display name of the sender.
    pub sender: String,
    /// Message body.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn session_with_scores(scores: &[(u8, u32)]) -> GameSession {
        GameSession {
            code: GameCode::new("ABC123"),
            owner: PlayerId::new(),
            is_active: true,
            min_players: 6,
            current_turn: Position::new(0),
            players: scores
                .iter()
                .map(|&(pos, score)| PlayerRef {
                    id: PlayerId::new(),
                    position: Position::new(pos),
                    score,
                    card_count: 8,
                    connected: true,
                })
                .collect(),
            logs: Vec::new(),
        }
    }

    #[test]
    fn team_scores_split_by_parity() {
        let session = session_with_scores(&[(0, 2), (1, 1), (2, 3), (3, 0)]);
        assert_eq!(session.team_score(Team::Even), 5);
        assert_eq!(session.team_score(Team::Odd), 1);
    }

    #[test]
    fn log_entry_parses_title_and_message() {
        let entry = LogEntry::new("Ask player 3 asked player 2 for 7H");
        let parsed = entry.parsed();
        assert_eq!(parsed.title, "Ask");
        assert_eq!(parsed.message, "player 3 asked player 2 for 7H");
    }

    #[test]
    fn log_entry_without_message() {
        let entry = LogEntry::new("Shuffle");
        let parsed = entry.parsed();
        assert_eq!(parsed.title, "Shuffle");
        assert_eq!(parsed.message, "");
        assert_eq!(entry.winning_team(), None);
    }

    #[test]
    fn game_over_carries_winning_team() {
        assert_eq!(LogEntry::new("GameOver 0").winning_team(), Some(Team::Even));
        assert_eq!(LogEntry::new("GameOver 1").winning_team(), Some(Team::Odd));
        assert_eq!(LogEntry::new("GameOver x").winning_team(), None);
        assert_eq!(LogEntry::new("Ask 1").winning_team(), None);
    }

    #[test]
    fn session_json_uses_camel_case() {
        let session = session_with_scores(&[(0, 0)]);
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("isActive").is_some());
        assert!(json.get("minPlayers").is_some());
        assert!(json.get("currentTurn").is_some());
        assert!(json["players"][0].get("cardCount").is_some());
    }

    #[test]
    fn player_hand_roundtrips() {
        let player = Player {
            id: PlayerId::new(),
            position: Position::new(2),
            score: 1,
            hand: vec![
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::Ace, Suit::Spades),
            ],
            connected: true,
        };
        let json = serde_json::to_string(&player).unwrap();
        let restored: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, restored);
    }
}
