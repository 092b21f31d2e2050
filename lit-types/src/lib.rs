//! # lit-types
//!
//! Wire format and domain types for the Literature game client.
//!
//! This crate provides the foundational types used across all client crates:
//! - [`Card`], [`Suit`], [`Rank`], [`RankRange`] - Card domain types
//! - [`PlayerId`], [`GameCode`], [`Position`], [`Team`] - Identity types
//! - [`GameSession`], [`Player`], [`LogEntry`] - Session data model
//! - [`ServerEvent`] - Inbound channel events
//! - [`ClientRequest`] - Outbound turn actions
//! - [`LitError`] - Error types

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cards;
mod error;
mod events;
mod ids;
mod requests;
mod session;

pub use cards::{Card, Rank, RankRange, Suit};
pub use error::LitError;
pub use events::{
    ChatResponse, GameDataResponse, NamedEvent, PlayerDataResponse, ProbeResponse, ServerError,
    ServerEvent, SessionSnapshot, UpdateResponse, STATUS_OK,
};
pub use ids::{GameCode, PlayerId, Position, Team};
pub use requests::ClientRequest;
pub use session::{
    ChatMessage, GameSession, LogEntry, ParsedLog, Player, PlayerRef, PlayerSummary,
    GAME_OVER_TITLE,
};
