//! Session state store.
//!
//! [`SessionStore`] holds the canonical client-visible game state. All
//! mutation funnels through [`SessionStore::apply`] (single-writer
//! discipline); reads are plain accessors over the current snapshot.
//!
//! The store is a pure function of the transition history: replaying the
//! same ordered transitions against a fresh store always yields the same
//! state, which is what makes the event pump testable without a channel.

use lit_types::{
    ChatMessage, GameSession, Player, PlayerRef, PlayerSummary, ServerError, Team,
};

use crate::Transition;

/// The derived session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No session; the player is outside any game.
    NoSession,
    /// A create/join request is in flight.
    Joining,
    /// In a session lobby, waiting for the game to start.
    InLobby,
    /// The game is running.
    InProgress,
    /// The game finished; a `GameOver` log entry is present.
    Ended,
}

/// Canonical client-visible state for one session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionStore {
    game: Option<GameSession>,
    player: Option<Player>,
    roster: Vec<PlayerSummary>,
    chat: Vec<ChatMessage>,
    error: Option<ServerError>,
    joining: bool,
}

impl SessionStore {
    /// Create an empty store (no session).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a create/join request was sent.
    ///
    /// The store only ever sees responses; the caller marks the outbound
    /// edge so `phase()` can report `Joining`.
    pub fn mark_joining(&mut self) {
        self.joining = true;
    }

    /// Apply one transition. The single mutation path for all state.
    ///
    /// Failures land in the `error` field; successful request outcomes
    /// clear it. Data-replacement events leave it untouched.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::PlayersListLoaded(roster) => {
                self.roster = roster;
                self.error = None;
            }
            Transition::PlayersListFailed(e) => self.error = Some(e),
            Transition::GameCreated(snapshot)
            | Transition::GameJoined(snapshot)
            | Transition::Reconnected(snapshot) => {
                self.game = Some(snapshot.game);
                self.player = Some(snapshot.player);
                self.joining = false;
                self.error = None;
            }
            Transition::CreateFailed(e)
            | Transition::JoinFailed(e)
            | Transition::ReconnectFailed(e) => {
                self.joining = false;
                self.error = Some(e);
            }
            Transition::GameLeft => *self = Self::default(),
            Transition::LeaveFailed(e) | Transition::StartFailed(e) => self.error = Some(e),
            Transition::GameStarted => {
                if let Some(game) = &mut self.game {
                    game.is_active = true;
                }
                self.error = None;
            }
            Transition::ReplaceGameData(game) => self.game = Some(game),
            Transition::ReplacePlayerData(player) => self.player = Some(player),
            Transition::ChatReceived(message) => self.chat.push(message),
            Transition::ChatFailed(e) => self.error = Some(e),
        }
    }

    /// The derived lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        match &self.game {
            None => {
                if self.joining {
                    SessionPhase::Joining
                } else {
                    SessionPhase::NoSession
                }
            }
            Some(game) => {
                if self.winners().is_some() {
                    SessionPhase::Ended
                } else if game.is_active {
                    SessionPhase::InProgress
                } else {
                    SessionPhase::InLobby
                }
            }
        }
    }

    /// The winning team, once the latest log entry says `GameOver`.
    pub fn winners(&self) -> Option<Team> {
        self.game
            .as_ref()
            .and_then(|g| g.latest_log())
            .and_then(|log| log.winning_team())
    }

    /// The current session, if any.
    pub fn game(&self) -> Option<&GameSession> {
        self.game.as_ref()
    }

    /// The local player, if in a session.
    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// The lobby roster from the most recent probe.
    pub fn roster(&self) -> &[PlayerSummary] {
        &self.roster
    }

    /// Chat messages received this session, oldest first.
    pub fn chat(&self) -> &[ChatMessage] {
        &self.chat
    }

    /// The most recent protocol failure, if it has not been superseded.
    pub fn error(&self) -> Option<&ServerError> {
        self.error.as_ref()
    }

    /// Teammates of the local player, by the session's player list.
    ///
    /// Excludes the local player; useful for declaration assignment.
    pub fn teammates(&self) -> Vec<&PlayerRef> {
        let (Some(game), Some(player)) = (&self.game, &self.player) else {
            return Vec::new();
        };
        game.players
            .iter()
            .filter(|p| p.position != player.position && p.position.same_team(player.position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lit_types::{Card, GameCode, LogEntry, PlayerId, Position, SessionSnapshot};

    fn player(position: u8) -> Player {
        Player {
            id: PlayerId::new(),
            position: Position::new(position),
            score: 0,
            hand: vec!["2H".parse::<Card>().unwrap()],
            connected: true,
        }
    }

    fn player_ref(position: u8) -> PlayerRef {
        PlayerRef {
            id: PlayerId::new(),
            position: Position::new(position),
            score: 0,
            card_count: 8,
            connected: true,
        }
    }

    fn game(active: bool, positions: &[u8]) -> GameSession {
        GameSession {
            code: GameCode::new("AB12"),
            owner: PlayerId::new(),
            is_active: active,
            min_players: 6,
            current_turn: Position::new(0),
            players: positions.iter().copied().map(player_ref).collect(),
            logs: Vec::new(),
        }
    }

    fn snapshot(active: bool) -> SessionSnapshot {
        SessionSnapshot {
            game: game(active, &[0, 1, 2, 3]),
            player: player(0),
        }
    }

    fn err(code: u16) -> ServerError {
        ServerError {
            code,
            message: "denied".into(),
        }
    }

    #[test]
    fn lifecycle_no_session_to_lobby() {
        let mut store = SessionStore::new();
        assert_eq!(store.phase(), SessionPhase::NoSession);

        store.mark_joining();
        assert_eq!(store.phase(), SessionPhase::Joining);

        store.apply(Transition::GameJoined(snapshot(false)));
        assert_eq!(store.phase(), SessionPhase::InLobby);
    }

    #[test]
    fn start_moves_lobby_to_in_progress() {
        let mut store = SessionStore::new();
        store.apply(Transition::GameCreated(snapshot(false)));
        assert_eq!(store.phase(), SessionPhase::InLobby);

        store.apply(Transition::GameStarted);
        assert_eq!(store.phase(), SessionPhase::InProgress);
    }

    #[test]
    fn game_over_log_ends_the_session() {
        let mut store = SessionStore::new();
        store.apply(Transition::GameJoined(snapshot(true)));
        assert_eq!(store.phase(), SessionPhase::InProgress);

        let mut ended = game(true, &[0, 1]);
        ended.logs = vec![LogEntry::new("GameOver 1"), LogEntry::new("Declare done")];
        store.apply(Transition::ReplaceGameData(ended));

        assert_eq!(store.phase(), SessionPhase::Ended);
        assert_eq!(store.winners(), Some(Team::Odd));
    }

    #[test]
    fn reconnect_restores_phase_from_snapshot() {
        // An in-progress snapshot must land in InProgress, not InLobby.
        let mut store = SessionStore::new();
        store.apply(Transition::Reconnected(snapshot(true)));
        assert_eq!(store.phase(), SessionPhase::InProgress);

        let mut store = SessionStore::new();
        store.apply(Transition::Reconnected(snapshot(false)));
        assert_eq!(store.phase(), SessionPhase::InLobby);
    }

    #[test]
    fn leave_resets_everything() {
        let mut store = SessionStore::new();
        store.apply(Transition::GameJoined(snapshot(true)));
        store.apply(Transition::ChatReceived(ChatMessage {
            sender: "ana".into(),
            text: "hi".into(),
        }));
        store.apply(Transition::ChatFailed(err(429)));

        store.apply(Transition::GameLeft);

        assert_eq!(store, SessionStore::new());
        assert_eq!(store.phase(), SessionPhase::NoSession);
    }

    #[test]
    fn failures_become_state_not_errors() {
        let mut store = SessionStore::new();
        store.mark_joining();
        store.apply(Transition::JoinFailed(err(404)));

        assert_eq!(store.error().map(|e| e.code), Some(404));
        assert_eq!(store.phase(), SessionPhase::NoSession);
    }

    #[test]
    fn success_clears_previous_error() {
        let mut store = SessionStore::new();
        store.apply(Transition::StartFailed(err(403)));
        assert!(store.error().is_some());

        store.apply(Transition::GameJoined(snapshot(false)));
        assert!(store.error().is_none());
    }

    #[test]
    fn replace_game_data_is_full_overwrite() {
        let mut store = SessionStore::new();
        store.apply(Transition::GameJoined(snapshot(false)));

        let replacement = game(true, &[0, 1]);
        store.apply(Transition::ReplaceGameData(replacement.clone()));

        assert_eq!(store.game(), Some(&replacement));
    }

    #[test]
    fn replace_player_data_is_full_overwrite() {
        let mut store = SessionStore::new();
        store.apply(Transition::GameJoined(snapshot(false)));

        let replacement = player(2);
        store.apply(Transition::ReplacePlayerData(replacement.clone()));

        assert_eq!(store.player(), Some(&replacement));
    }

    #[test]
    fn roster_loads_from_probe() {
        let mut store = SessionStore::new();
        store.apply(Transition::PlayersListLoaded(vec![lit_types::PlayerSummary {
            id: PlayerId::new(),
            position: Position::new(0),
            connected: true,
        }]));
        assert_eq!(store.roster().len(), 1);

        store.apply(Transition::PlayersListFailed(err(500)));
        assert_eq!(store.error().map(|e| e.code), Some(500));
    }

    #[test]
    fn teammates_are_same_parity_excluding_self() {
        let mut store = SessionStore::new();
        store.apply(Transition::GameJoined(SessionSnapshot {
            game: game(true, &[0, 1, 2, 3, 4, 5]),
            player: player(0),
        }));

        let positions: Vec<u8> = store
            .teammates()
            .iter()
            .map(|p| p.position.value())
            .collect();
        assert_eq!(positions, vec![2, 4]);
    }

    #[test]
    fn replaying_history_is_deterministic() {
        let history = vec![
            Transition::GameJoined(snapshot(false)),
            Transition::GameStarted,
            Transition::ReplaceGameData(game(true, &[0, 1, 2, 3])),
            Transition::ReplacePlayerData(player(0)),
            Transition::ChatFailed(err(429)),
        ];

        let mut first = SessionStore::new();
        let mut second = SessionStore::new();
        for t in &history {
            first.apply(t.clone());
        }
        for t in &history {
            second.apply(t.clone());
        }

        assert_eq!(first, second);
    }
}
