//! Identity and seating types for the Literature client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a player, issued by the server.
///
/// UUID v4 format, displayed in the canonical hyphenated form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(uuid::Uuid);

impl PlayerId {
    /// Create a new random PlayerId.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Parse a PlayerId from its string form.
    pub fn parse(s: &str) -> Option<Self> {
        uuid::Uuid::parse_str(s).ok().map(Self)
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

/// The short shareable code identifying a game session.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameCode(String);

impl GameCode {
    /// Create a game code from its string form.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for GameCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameCode({})", self.0)
    }
}

/// A player's fixed seat index at the table.
///
/// Position parity determines team membership: even positions form one
/// team, odd positions the other.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Position(u8);

impl Position {
    /// Create a new Position with the given seat index.
    pub fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the numeric seat index.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The team this seat belongs to.
    pub fn team(&self) -> Team {
        if self.0 % 2 == 0 {
            Team::Even
        } else {
            Team::Odd
        }
    }

    /// Whether this seat is on the same team as another.
    pub fn same_team(&self, other: Position) -> bool {
        self.team() == other.team()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.0)
    }
}

/// One of the two teams, identified by seat parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// The team of even seat positions (id 0).
    Even,
    /// The team of odd seat positions (id 1).
    Odd,
}

impl Team {
    /// The numeric team id used on the wire (0 or 1).
    pub fn id(&self) -> u8 {
        match self {
            Team::Even => 0,
            Team::Odd => 1,
        }
    }

    /// Parse a team from its numeric id.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Team::Even),
            1 => Some(Team::Odd),
            _ => None,
        }
    }

    /// The opposing team.
    pub fn opponent(&self) -> Team {
        match self {
            Team::Even => Team::Odd,
            Team::Odd => Team::Even,
        }
    }
}
