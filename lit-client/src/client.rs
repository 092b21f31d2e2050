//! GameClient - the main interface for the Literature client.
//!
//! This module provides [`GameClient`], the API a front end uses to stay
//! in sync with the game server and submit turn actions.
//!
//! # Architecture
//!
//! GameClient uses the pure controller and store (from lit-core) for
//! protocol logic and performs the actual I/O via the [`Channel`] trait.
//! [`GameClient::process_next`] is the single consumer of inbound events:
//! each event is classified and applied to completion, in channel order,
//! before the next one is read. Protocol failures become store state;
//! nothing here retries.

use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

use lit_core::{classify, plan, DeclareError, SessionPhase, SessionStore};
use lit_types::{
    Card, ClientRequest, GameCode, LitError, PlayerId, Position, RankRange, ServerEvent, Suit,
};

use crate::channel::{Channel, ChannelError};
use crate::resume::ResumeInfo;

/// Client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Channel error.
    #[error("channel error: {0}")]
    Channel(#[from] ChannelError),

    /// Encoding error.
    #[error("codec error: {0}")]
    Codec(#[from] LitError),

    /// The action needs an active session and there is none.
    #[error("no active session")]
    NoSession,
}

/// Configuration for GameClient.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Address of the game server to connect to.
    pub server_address: String,
    /// Display name used when creating or joining games.
    pub player_name: String,
    /// Stored session identity to resume, if any.
    pub resume: Option<ResumeInfo>,
}

impl ClientConfig {
    /// Create a new configuration.
    pub fn new(server_address: &str, player_name: &str) -> Self {
        Self {
            server_address: server_address.to_string(),
            player_name: player_name.to_string(),
            resume: None,
        }
    }

    /// Attach stored resume state; `connect()` will issue a `CONNECT`.
    pub fn with_resume(mut self, resume: ResumeInfo) -> Self {
        self.resume = Some(resume);
        self
    }
}

/// The main game client.
///
/// Owns the session store and funnels every mutation through the
/// controller's transitions (single-writer discipline). Reads hand out
/// cloned snapshots, so presentation never observes a half-applied event.
pub struct GameClient<C: Channel> {
    config: ClientConfig,
    channel: C,
    store: Arc<Mutex<SessionStore>>,
}

impl<C: Channel> GameClient<C> {
    /// Create a new GameClient.
    pub fn new(config: ClientConfig, channel: C) -> Self {
        Self {
            config,
            channel,
            store: Arc::new(Mutex::new(SessionStore::new())),
        }
    }

    /// Connect to the server.
    ///
    /// With resume state configured this issues a `CONNECT` request so the
    /// server restores the previous session snapshot; it is never treated
    /// as a fresh join. Reconnection is only ever caller-initiated.
    pub async fn connect(&self) -> Result<(), ClientError> {
        self.channel.connect(&self.config.server_address).await?;

        if let Some(resume) = &self.config.resume {
            self.send(ClientRequest::Reconnect {
                code: resume.game_code.clone(),
                player_id: resume.player_id,
            })
            .await?;
        }
        Ok(())
    }

    /// Close the connection.
    pub async fn disconnect(&self) -> Result<(), ClientError> {
        self.channel.close().await?;
        Ok(())
    }

    /// Request a new game session.
    pub async fn create_game(&self) -> Result<(), ClientError> {
        self.store.lock().await.mark_joining();
        self.send(ClientRequest::CreateGame {
            name: self.config.player_name.clone(),
        })
        .await
    }

    /// Request to join an existing session.
    pub async fn join_game(&self, code: GameCode) -> Result<(), ClientError> {
        self.store.lock().await.mark_joining();
        self.send(ClientRequest::JoinGame {
            code,
            name: self.config.player_name.clone(),
        })
        .await
    }

    /// Request to leave the current session.
    pub async fn leave_game(&self) -> Result<(), ClientError> {
        let (code, player_id) = self.session_identity().await?;
        self.send(ClientRequest::LeaveGame { code, player_id }).await
    }

    /// Request a game start (the server enforces ownership and quorum).
    pub async fn start_game(&self) -> Result<(), ClientError> {
        let (code, player_id) = self.session_identity().await?;
        self.send(ClientRequest::StartGame { code, player_id }).await
    }

    /// Ask the player at `target` for a card.
    pub async fn ask_card(&self, target: Position, card: Card) -> Result<(), ClientError> {
        let (code, fid) = self.session_identity().await?;
        self.send(ClientRequest::AskCard {
            code,
            fid,
            target,
            card,
        })
        .await
    }

    /// Hand the turn to the teammate at `target`.
    pub async fn transfer_turn(&self, target: Position) -> Result<(), ClientError> {
        let (code, fid) = self.session_identity().await?;
        self.send(ClientRequest::TransferTurn { code, fid, target })
            .await
    }

    /// Send a chat message to the table.
    pub async fn send_chat(&self, text: &str) -> Result<(), ClientError> {
        let (code, fid) = self.session_identity().await?;
        self.send(ClientRequest::SendChat {
            code,
            fid,
            text: text.to_string(),
        })
        .await
    }

    /// Declare the (suit, range) set with the given teammate assignments.
    ///
    /// Cards in the local hand are auto-assigned to the local player.
    /// Returns `Ok(true)` once the declaration was submitted, `Ok(false)`
    /// when a card is still unassigned - in that case nothing is emitted
    /// and no state changes, per the validity invariant.
    pub async fn declare(
        &self,
        suit: Suit,
        range: RankRange,
        assignments: &BTreeMap<Card, Position>,
    ) -> Result<bool, ClientError> {
        let (code, fid, declarer, hand) = {
            let store = self.store.lock().await;
            let game = store.game().ok_or(ClientError::NoSession)?;
            let player = store.player().ok_or(ClientError::NoSession)?;
            (
                game.code.clone(),
                player.id,
                player.position,
                player.hand.clone(),
            )
        };

        let declaration = match plan(suit, range, declarer, &hand, assignments) {
            Ok(declaration) => declaration,
            Err(DeclareError::Unassigned(card)) => {
                tracing::debug!("declaration withheld: {card} unassigned");
                return Ok(false);
            }
        };

        self.send(ClientRequest::PlayDeclare {
            code,
            fid,
            declaration: declaration.wire_groups(),
        })
        .await?;
        Ok(true)
    }

    /// Process exactly one inbound event.
    ///
    /// Reads the next event from the channel, classifies it and applies
    /// the transition to completion before returning. Events that are not
    /// ours (unsubscribed names, unknown update subtypes) are no-ops;
    /// events whose payload violates the protocol contract are logged and
    /// skipped without touching state. Only channel failures propagate.
    pub async fn process_next(&self) -> Result<(), ClientError> {
        let event = self.channel.recv().await?;

        let parsed = match ServerEvent::from_named(&event.name, &event.payload) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => {
                tracing::debug!(event = %event.name, "ignoring unsubscribed event");
                return Ok(());
            }
            Err(e) => {
                tracing::warn!(event = %event.name, "dropping malformed payload: {e}");
                return Ok(());
            }
        };

        match classify(parsed) {
            Ok(Some(transition)) => {
                tracing::debug!(?transition, "applying transition");
                self.store.lock().await.apply(transition);
            }
            Ok(None) => {
                tracing::debug!(event = %event.name, "unknown update subtype, no-op");
            }
            Err(e) => {
                tracing::warn!(event = %event.name, "dropping event: {e}");
            }
        }
        Ok(())
    }

    /// A snapshot of the current session state.
    pub async fn snapshot(&self) -> SessionStore {
        self.store.lock().await.clone()
    }

    /// The derived session lifecycle phase.
    pub async fn phase(&self) -> SessionPhase {
        self.store.lock().await.phase()
    }

    /// Get a reference to the underlying channel (for testing).
    pub fn channel(&self) -> &C {
        &self.channel
    }

    async fn send(&self, request: ClientRequest) -> Result<(), ClientError> {
        let payload = request.to_bytes()?;
        self.channel.emit(request.event_name(), &payload).await?;
        Ok(())
    }

    async fn session_identity(&self) -> Result<(GameCode, PlayerId), ClientError> {
        let store = self.store.lock().await;
        let game = store.game().ok_or(ClientError::NoSession)?;
        let player = store.player().ok_or(ClientError::NoSession)?;
        Ok((game.code.clone(), player.id))
    }
}
