//! Wire messages exchanged over a game channel.

use actix::Message;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{EngineSnapshot, GameCode, GuessResult};

/// Engine snapshot plus the hosting context a client needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(flatten)]
    pub snapshot: EngineSnapshot,
    pub game_code: GameCode,
    pub player_count: usize,
}

/// Events pushed to connected channels. Tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Message)]
#[rtype(result = "()")]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    Connected {
        session_id: Uuid,
        game_state: GameState,
    },
    GameStateUpdate {
        game_state: GameState,
    },
    ClueGiven {
        clue: String,
        number: u8,
        game_state: GameState,
    },
    GuessMade {
        row: usize,
        col: usize,
        result: GuessResult,
        game_state: GameState,
    },
    TurnEnded {
        game_state: GameState,
    },
    PlayerJoined {
        player_count: usize,
        game_state: GameState,
    },
    PlayerLeft {
        player_count: usize,
        game_state: GameState,
    },
}

impl ServerEvent {
    /// The `type` tag as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            ServerEvent::Connected { .. } => "connected",
            ServerEvent::GameStateUpdate { .. } => "gameStateUpdate",
            ServerEvent::ClueGiven { .. } => "clueGiven",
            ServerEvent::GuessMade { .. } => "guessMade",
            ServerEvent::TurnEnded { .. } => "turnEnded",
            ServerEvent::PlayerJoined { .. } => "playerJoined",
            ServerEvent::PlayerLeft { .. } => "playerLeft",
        }
    }

    pub fn game_state(&self) -> &GameState {
        match self {
            ServerEvent::Connected { game_state, .. }
            | ServerEvent::GameStateUpdate { game_state }
            | ServerEvent::ClueGiven { game_state, .. }
            | ServerEvent::GuessMade { game_state, .. }
            | ServerEvent::TurnEnded { game_state }
            | ServerEvent::PlayerJoined { game_state, .. }
            | ServerEvent::PlayerLeft { game_state, .. } => game_state,
        }
    }
}

/// Inbound text frames. Anything that does not parse is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMsg {
    Sync,
}
