//! Commands accepted by a game actor and the replies it gives.

use actix::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Clue, GuessResult};
use crate::ws::protocol::GameState;
use crate::ws::sink::EventSink;

/// Deal a fresh board. Broadcasts `gameStateUpdate`.
#[derive(Message)]
#[rtype(result = "GameState")]
pub struct NewGame;

/// Clue command. Broadcasts `clueGiven` on success. The actor re-applies
/// the clue shape rules, so a malformed clue is declined.
#[derive(Message, Debug, Clone)]
#[rtype(result = "CommandResponse")]
pub struct GiveClue {
    pub word: String,
    pub number: u8,
}

/// Guess command. Broadcasts `guessMade` on success; off-board cells are
/// declined by the engine.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "CommandResponse")]
pub struct MakeGuess {
    pub row: usize,
    pub col: usize,
}

/// Broadcasts `turnEnded` on success.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "CommandResponse")]
pub struct EndTurn;

#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "GameState")]
pub struct GetState;

/// Attach a channel. The new session gets a private `connected` event and
/// everyone else gets `playerJoined`.
#[derive(Message)]
#[rtype(result = "ChannelOpened")]
pub struct OpenChannel {
    pub sink: Box<dyn EventSink>,
}

#[derive(Debug, Clone, PartialEq, Eq, MessageResponse)]
pub struct ChannelOpened {
    pub session_id: Uuid,
    pub game_state: GameState,
}

/// Detach a channel. Replies whether the session was still registered.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "bool")]
pub struct CloseChannel {
    pub session_id: Uuid,
}

/// Re-send the current state privately to one session. Replies `false`
/// when the session is no longer registered (closed or evicted).
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "bool")]
pub struct SyncChannel {
    pub session_id: Uuid,
}

/// Outcome of a clue, guess or end-turn command.
///
/// A declined command has `success == false`, a `message`, and the
/// unchanged state; nothing is broadcast for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, MessageResponse)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GuessResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_over: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub won: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clue: Option<Clue>,
    pub game_state: GameState,
}

impl CommandResponse {
    pub fn ok(game_state: GameState) -> Self {
        Self {
            success: true,
            message: None,
            result: None,
            game_over: None,
            won: None,
            clue: None,
            game_state,
        }
    }

    pub fn declined(message: impl Into<String>, game_state: GameState) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            ..Self::ok(game_state)
        }
    }
}
