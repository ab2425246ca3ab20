//! The Duet game state machine.
//!
//! `GameEngine` owns one board plus the turn state and applies clue, guess
//! and end-turn transitions. It performs no I/O and knows nothing about
//! sessions or game codes; serialization of access is the caller's job.
//!
//! Phases:
//! - `AwaitingClue`: no clue active, `guesses_remaining == 0`.
//! - `AwaitingGuesses`: a clue is active, `guesses_remaining > 0`.
//! - `GameOver`: terminal; every command is refused.

use std::fmt;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::board::{Board, CardKind, Position, GREEN_COUNT};
use crate::domain::snapshot::EngineSnapshot;
use crate::domain::words::WORDS;
use crate::errors::domain::DomainError;

/// Clues the two players may give before the game is lost on time.
pub const MAX_MOVES: u32 = 9;

/// Injected randomness for board generation.
pub type BoardRng = Box<dyn RngCore + Send>;

/// The two seats. Serialized as `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl Serialize for Player {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub word: String,
    pub number: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessResult {
    Green,
    Assassin,
    Neutral,
}

impl From<CardKind> for GuessResult {
    fn from(kind: CardKind) -> Self {
        match kind {
            CardKind::Green => GuessResult::Green,
            CardKind::Assassin => GuessResult::Assassin,
            CardKind::Neutral => GuessResult::Neutral,
        }
    }
}

/// What a successful guess did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub position: Position,
    pub result: GuessResult,
    pub game_over: bool,
    pub won: bool,
    /// The guess handed the turn to the other player.
    pub turn_ended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingClue,
    AwaitingGuesses,
    GameOver { won: bool },
}

pub struct GameEngine {
    rng: BoardRng,
    board: Board,
    revealed_green: usize,
    move_count: u32,
    max_moves: u32,
    turn_owner: Player,
    clue: Option<Clue>,
    guesses_remaining: u8,
    game_over: bool,
    won: bool,
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("phase", &self.phase())
            .field("turn_owner", &self.turn_owner)
            .field("move_count", &self.move_count)
            .field("guesses_remaining", &self.guesses_remaining)
            .field("revealed_green", &self.revealed_green)
            .finish_non_exhaustive()
    }
}

impl GameEngine {
    /// Create an engine drawing boards from `rng` and deal the first board.
    pub fn new(mut rng: BoardRng) -> Self {
        let board = Board::generate(&mut *rng, WORDS);
        Self {
            rng,
            board,
            revealed_green: 0,
            move_count: 0,
            max_moves: MAX_MOVES,
            turn_owner: Player::One,
            clue: None,
            guesses_remaining: 0,
            game_over: false,
            won: false,
        }
    }

    /// Engine with a reproducible board sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(ChaCha8Rng::seed_from_u64(seed)))
    }

    /// Engine seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(Box::new(ChaCha8Rng::from_os_rng()))
    }

    /// Deal a fresh board and return every counter to its starting value.
    pub fn reset(&mut self) {
        self.board = Board::generate(&mut *self.rng, WORDS);
        self.revealed_green = 0;
        self.move_count = 0;
        self.max_moves = MAX_MOVES;
        self.turn_owner = Player::One;
        self.clue = None;
        self.guesses_remaining = 0;
        self.game_over = false;
        self.won = false;
    }

    /// Start a turn's guessing. Grants `number + 1` guesses (the bonus guess)
    /// and spends one move.
    pub fn give_clue(&mut self, word: impl Into<String>, number: u8) -> Result<Clue, DomainError> {
        if self.game_over {
            return Err(DomainError::GameOver);
        }
        if self.guesses_remaining > 0 {
            return Err(DomainError::GuessesOutstanding {
                remaining: self.guesses_remaining,
            });
        }

        let clue = Clue {
            word: word.into(),
            number,
        };
        self.guesses_remaining = number.saturating_add(1);
        self.move_count += 1;
        self.clue = Some(clue.clone());
        Ok(clue)
    }

    /// Reveal the card at `(row, col)`.
    ///
    /// Green keeps the turn while guesses remain, neutral ends it, and an
    /// assassin ends the game. Running out of guesses also ends the turn.
    pub fn make_guess(&mut self, row: usize, col: usize) -> Result<GuessOutcome, DomainError> {
        if self.game_over {
            return Err(DomainError::GameOver);
        }
        if self.guesses_remaining == 0 {
            return Err(DomainError::NoActiveClue);
        }
        let position = Position::new(row, col).ok_or(DomainError::OutOfBounds { row, col })?;
        let kind = self
            .board
            .reveal(position)
            .ok_or(DomainError::AlreadyRevealed { row, col })?;

        self.guesses_remaining -= 1;
        let mut turn_ended = false;

        match kind {
            CardKind::Assassin => {
                self.game_over = true;
                self.won = false;
            }
            CardKind::Green => {
                self.revealed_green += 1;
                if self.revealed_green == GREEN_COUNT {
                    self.game_over = true;
                    self.won = true;
                } else if self.guesses_remaining == 0 {
                    self.switch_turn();
                    turn_ended = true;
                }
            }
            CardKind::Neutral => {
                self.guesses_remaining = 0;
                self.switch_turn();
                turn_ended = true;
            }
        }

        Ok(GuessOutcome {
            position,
            result: kind.into(),
            game_over: self.game_over,
            won: self.won,
            turn_ended,
        })
    }

    /// Pass the turn, discarding any remaining guesses.
    pub fn end_turn(&mut self) -> Result<(), DomainError> {
        if self.game_over {
            return Err(DomainError::GameOver);
        }
        self.guesses_remaining = 0;
        self.switch_turn();
        Ok(())
    }

    fn switch_turn(&mut self) {
        self.turn_owner = self.turn_owner.other();
        self.clue = None;
        if self.move_count >= self.max_moves && !self.won {
            self.game_over = true;
        }
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver { won: self.won }
        } else if self.guesses_remaining > 0 {
            Phase::AwaitingGuesses
        } else {
            Phase::AwaitingClue
        }
    }

    /// Public view of the game. Unrevealed cards report `neutral`.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::of(self)
    }

    /// The true board, kinds included. Never serialize this directly.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn_owner(&self) -> Player {
        self.turn_owner
    }

    pub fn clue(&self) -> Option<&Clue> {
        self.clue.as_ref()
    }

    pub fn guesses_remaining(&self) -> u8 {
        self.guesses_remaining
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn max_moves(&self) -> u32 {
        self.max_moves
    }

    pub fn revealed_green(&self) -> usize {
        self.revealed_green
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Engine over a fixed layout, for scripted tests.
    #[cfg(test)]
    pub(crate) fn with_board(board: Board) -> Self {
        let mut engine = Self::seeded(0);
        engine.board = board;
        engine
    }
}
