//! Public, serializable view of a game.
//!
//! This is the only serializable form of the board. An unrevealed card
//! always reports `neutral`, including after the game has ended.

use serde::Serialize;

use crate::domain::board::{Card, CardKind};
use crate::domain::engine::{Clue, GameEngine, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub word: &'static str,
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub revealed: bool,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        let kind = if card.is_revealed() {
            card.kind()
        } else {
            CardKind::Neutral
        };
        Self {
            word: card.word(),
            kind,
            revealed: card.is_revealed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshot {
    pub board: Vec<Vec<CardView>>,
    pub moves: u32,
    pub max_moves: u32,
    pub game_over: bool,
    pub won: bool,
    pub current_player: Player,
    pub clue: Option<Clue>,
    pub guesses_left: u8,
}

impl EngineSnapshot {
    pub(crate) fn of(engine: &GameEngine) -> Self {
        Self {
            board: engine
                .board()
                .rows()
                .map(|row| row.iter().map(CardView::from).collect())
                .collect(),
            moves: engine.move_count(),
            max_moves: engine.max_moves(),
            game_over: engine.is_game_over(),
            won: engine.is_won(),
            current_player: engine.turn_owner(),
            clue: engine.clue().cloned(),
            guesses_left: engine.guesses_remaining(),
        }
    }
}
