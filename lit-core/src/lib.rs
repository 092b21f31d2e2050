//! # lit-core
//!
//! Pure logic for the Literature game client (no I/O, instant tests).
//!
//! This crate implements the session-synchronization state machine and the
//! game's two algorithmic components without any network access, enabling
//! fast unit tests.
//!
//! ## Design Philosophy
//!
//! All modules in this crate are **pure** - they take input and produce
//! output without side effects. This enables:
//! - Instant unit tests (no mocks, no async)
//! - Deterministic behavior (same input → same output)
//! - Easy reasoning about state transitions
//!
//! The actual I/O (the event channel) is handled by `lit-client`, which
//! feeds inbound events through [`classify`] and applies the resulting
//! [`Transition`]s to a [`SessionStore`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controller;
pub mod declare;
pub mod layout;
pub mod store;

pub use controller::{classify, ClassifyError, Transition};
pub use declare::{
    offerable_ranges, offerable_sets, plan, set_cards, DeclareError, Declaration, DeclaredGroup,
    SET_SIZE,
};
pub use layout::{
    bezier_point, opponent_seats, player_hand_anchor, Orientation, Point, Viewport,
};
pub use store::{SessionPhase, SessionStore};
