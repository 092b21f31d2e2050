//! # lit-client
//!
//! Client library for the Literature game session protocol.
//!
//! This is the library a game front end uses to stay in sync with the
//! server and to submit turn actions.
//!
//! ## Architecture
//!
//! `GameClient` pumps inbound named events through the pure controller in
//! `lit-core` and applies the resulting transitions to the session store.
//! All I/O goes through the [`Channel`] trait, so the whole protocol is
//! testable against [`MockChannel`].
//!
//! ```text
//! Presentation → GameClient → Channel → Network
//!                    ↓
//!               lit-core (pure state machine)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use lit_client::{ClientConfig, GameClient, MockChannel};
//!
//! let channel = MockChannel::new();
//! let config = ClientConfig::new("server-address", "ana");
//! let client = GameClient::new(config, channel);
//!
//! client.connect().await?;
//! client.create_game().await?;
//! client.process_next().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod channel;
pub mod client;
pub mod resume;

pub use channel::{Channel, ChannelError, MockChannel};
pub use client::{ClientConfig, ClientError, GameClient};
pub use resume::{ResumeError, ResumeInfo};
