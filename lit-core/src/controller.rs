//! Game synchronization controller.
//!
//! This module translates inbound channel events into state transitions.
//! [`classify`] is a pure function: one event in, at most one [`Transition`]
//! out, in the order the channel delivers them. The caller (lit-client)
//! applies the transitions to a [`crate::SessionStore`].
//!
//! Unknown `game-updates` subtypes are an explicit no-op (`Ok(None)`), not
//! a failure: the server may speak newer dialects than this client.

use thiserror::Error;

use lit_types::{
    ChatMessage, GameSession, Player, PlayerSummary, ServerError, ServerEvent, SessionSnapshot,
    STATUS_OK,
};

/// A single state transition for the session store.
///
/// Every subscribed channel event maps to exactly one of these (or to none,
/// for unknown update subtypes). Failures carry the server's error payload;
/// they become store state, never panics or errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Lobby roster loaded from a probe.
    PlayersListLoaded(Vec<PlayerSummary>),
    /// Lobby probe failed.
    PlayersListFailed(ServerError),
    /// A new session was created; we are in its lobby.
    GameCreated(SessionSnapshot),
    /// Session creation failed.
    CreateFailed(ServerError),
    /// Joined an existing session's lobby.
    GameJoined(SessionSnapshot),
    /// Join failed.
    JoinFailed(ServerError),
    /// Left the session; all session state is discarded.
    GameLeft,
    /// Leave failed.
    LeaveFailed(ServerError),
    /// The game started (no payload; the next `game-data` snapshot follows).
    GameStarted,
    /// Start failed.
    StartFailed(ServerError),
    /// Reconnected: the server restored our session snapshot.
    Reconnected(SessionSnapshot),
    /// Reconnect failed.
    ReconnectFailed(ServerError),
    /// Full session overwrite (last-writer-wins, never a merge).
    ReplaceGameData(GameSession),
    /// Full local-player overwrite.
    ReplacePlayerData(Player),
    /// A chat message arrived.
    ChatReceived(ChatMessage),
    /// Chat delivery failed.
    ChatFailed(ServerError),
}

/// A subscribed event whose payload did not match its contract.
///
/// The event pump logs these and skips the event; no transition is applied.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// A success response was missing or carried a malformed snapshot.
    #[error("malformed {kind} snapshot: {source}")]
    MalformedSnapshot {
        /// The `game-updates` subtype.
        kind: String,
        /// The underlying decode failure.
        #[source]
        source: lit_types::LitError,
    },

    /// A chat success arrived without a message body.
    #[error("chat success without message")]
    MissingChatMessage,
}

/// Classify one inbound event into at most one transition.
///
/// Returns `Ok(None)` only for unknown `game-updates` subtypes.
pub fn classify(event: ServerEvent) -> Result<Option<Transition>, ClassifyError> {
    let transition = match event {
        ServerEvent::Probe(probe) => {
            if probe.code == STATUS_OK {
                Transition::PlayersListLoaded(probe.data)
            } else {
                Transition::PlayersListFailed(ServerError {
                    code: probe.code,
                    message: probe.error.unwrap_or_default(),
                })
            }
        }
        ServerEvent::Updates(update) => {
            let ok = update.code == STATUS_OK;
            match update.kind.as_str() {
                "CREATE" if ok => Transition::GameCreated(snapshot(&update)?),
                "CREATE" => Transition::CreateFailed(update.server_error()),
                "JOIN" if ok => Transition::GameJoined(snapshot(&update)?),
                "JOIN" => Transition::JoinFailed(update.server_error()),
                "LEAVE" if ok => Transition::GameLeft,
                "LEAVE" => Transition::LeaveFailed(update.server_error()),
                "START" if ok => Transition::GameStarted,
                "START" => Transition::StartFailed(update.server_error()),
                "CONNECT" if ok => Transition::Reconnected(snapshot(&update)?),
                "CONNECT" => Transition::ReconnectFailed(update.server_error()),
                _ => return Ok(None),
            }
        }
        ServerEvent::GameData(data) => Transition::ReplaceGameData(data.data),
        ServerEvent::PlayerData(data) => Transition::ReplacePlayerData(data.data),
        ServerEvent::Chat(chat) => {
            if chat.code == STATUS_OK {
                let message = chat.data.ok_or(ClassifyError::MissingChatMessage)?;
                Transition::ChatReceived(message)
            } else {
                Transition::ChatFailed(chat.server_error())
            }
        }
    };
    Ok(Some(transition))
}

fn snapshot(update: &lit_types::UpdateResponse) -> Result<SessionSnapshot, ClassifyError> {
    update.snapshot().map_err(|source| ClassifyError::MalformedSnapshot {
        kind: update.kind.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lit_types::{
        Card, ChatResponse, GameCode, GameDataResponse, PlayerDataResponse, PlayerId,
        ProbeResponse, UpdateResponse,
    };

    fn snapshot_value() -> serde_json::Value {
        serde_json::json!({
            "game": {
                "code": "AB12",
                "owner": PlayerId::new(),
                "isActive": false,
                "minPlayers": 6,
                "currentTurn": 0,
                "players": [],
                "logs": []
            },
            "player": {
                "id": PlayerId::new(),
                "position": 0,
                "score": 0,
                "hand": ["2H", "10S"],
                "connected": true
            }
        })
    }

    fn update(kind: &str, code: u16, with_data: bool) -> ServerEvent {
        ServerEvent::Updates(UpdateResponse {
            kind: kind.into(),
            code,
            data: with_data.then(snapshot_value),
            error: (code != 200).then(|| "denied".to_string()),
        })
    }

    #[test]
    fn every_update_kind_maps_to_exactly_one_transition() {
        let cases: [(&str, bool); 5] = [
            ("CREATE", true),
            ("JOIN", true),
            ("LEAVE", false),
            ("START", false),
            ("CONNECT", true),
        ];
        for (kind, carries_snapshot) in cases {
            let ok = classify(update(kind, 200, carries_snapshot))
                .unwrap()
                .expect("success must dispatch a transition");
            let failed = classify(update(kind, 500, false))
                .unwrap()
                .expect("failure must dispatch a transition");
            // Success and failure must be distinct transitions.
            assert_ne!(ok, failed, "{kind}: success and failure must differ");
            match (kind, &failed) {
                ("CREATE", Transition::CreateFailed(e))
                | ("JOIN", Transition::JoinFailed(e))
                | ("LEAVE", Transition::LeaveFailed(e))
                | ("START", Transition::StartFailed(e))
                | ("CONNECT", Transition::ReconnectFailed(e)) => {
                    assert_eq!(e.code, 500);
                    assert_eq!(e.message, "denied");
                }
                other => panic!("{kind}: unexpected failure transition {other:?}"),
            }
        }
    }

    #[test]
    fn create_success_carries_snapshot() {
        let transition = classify(update("CREATE", 200, true)).unwrap().unwrap();
        let Transition::GameCreated(snapshot) = transition else {
            panic!("expected GameCreated");
        };
        assert_eq!(snapshot.game.code, GameCode::new("AB12"));
        assert_eq!(snapshot.player.hand.len(), 2);
        assert_eq!(snapshot.player.hand[1], "10S".parse::<Card>().unwrap());
    }

    #[test]
    fn start_success_has_no_payload() {
        let transition = classify(update("START", 200, false)).unwrap().unwrap();
        assert_eq!(transition, Transition::GameStarted);
    }

    #[test]
    fn connect_success_restores_not_rejoins() {
        let transition = classify(update("CONNECT", 200, true)).unwrap().unwrap();
        assert!(matches!(transition, Transition::Reconnected(_)));
    }

    #[test]
    fn unknown_update_kind_is_a_no_op() {
        let result = classify(update("SHUFFLE", 200, false)).unwrap();
        assert!(result.is_none());
        let result = classify(update("", 500, false)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn create_success_without_snapshot_is_malformed() {
        let result = classify(update("CREATE", 200, false));
        assert!(matches!(
            result,
            Err(ClassifyError::MalformedSnapshot { .. })
        ));
    }

    #[test]
    fn probe_maps_on_status() {
        let loaded = classify(ServerEvent::Probe(ProbeResponse {
            code: 200,
            data: vec![],
            error: None,
        }))
        .unwrap()
        .unwrap();
        assert!(matches!(loaded, Transition::PlayersListLoaded(_)));

        let failed = classify(ServerEvent::Probe(ProbeResponse {
            code: 503,
            data: vec![],
            error: Some("unavailable".into()),
        }))
        .unwrap()
        .unwrap();
        let Transition::PlayersListFailed(err) = failed else {
            panic!("expected PlayersListFailed");
        };
        assert_eq!(err.code, 503);
    }

    #[test]
    fn data_events_always_replace() {
        let value = snapshot_value();
        let game: lit_types::GameSession = serde_json::from_value(value["game"].clone()).unwrap();
        let player: lit_types::Player = serde_json::from_value(value["player"].clone()).unwrap();

        let t = classify(ServerEvent::GameData(GameDataResponse { data: game.clone() }))
            .unwrap()
            .unwrap();
        assert_eq!(t, Transition::ReplaceGameData(game));

        let t = classify(ServerEvent::PlayerData(PlayerDataResponse {
            data: player.clone(),
        }))
        .unwrap()
        .unwrap();
        assert_eq!(t, Transition::ReplacePlayerData(player));
    }

    #[test]
    fn chat_maps_on_status() {
        let received = classify(ServerEvent::Chat(ChatResponse {
            code: 200,
            data: Some(ChatMessage {
                sender: "ana".into(),
                text: "hi".into(),
            }),
            error: None,
        }))
        .unwrap()
        .unwrap();
        assert!(matches!(received, Transition::ChatReceived(_)));

        let failed = classify(ServerEvent::Chat(ChatResponse {
            code: 429,
            data: None,
            error: Some("slow down".into()),
        }))
        .unwrap()
        .unwrap();
        assert!(matches!(failed, Transition::ChatFailed(_)));
    }

    #[test]
    fn chat_success_without_body_is_malformed() {
        let result = classify(ServerEvent::Chat(ChatResponse {
            code: 200,
            data: None,
            error: None,
        }));
        assert!(matches!(result, Err(ClassifyError::MissingChatMessage)));
    }
}
