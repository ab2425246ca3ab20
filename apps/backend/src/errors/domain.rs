//! Rejections raised by the game engine.
//!
//! These are well-formed commands that are not legal in the current state.
//! They never mutate the engine and are reported to callers as a declined
//! command rather than as an HTTP error; `Display` is the user-facing message.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The game has ended; every command is refused.
    GameOver,
    /// A clue was offered while guesses from the previous clue remain.
    GuessesOutstanding { remaining: u8 },
    /// A guess was made with no active clue.
    NoActiveClue,
    /// Coordinates fall outside the 5x5 board.
    OutOfBounds { row: usize, col: usize },
    /// The target card has already been revealed.
    AlreadyRevealed { row: usize, col: usize },
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::GameOver => write!(f, "cannot act, game over"),
            DomainError::GuessesOutstanding { remaining } => {
                write!(f, "cannot give clue now: {remaining} guesses outstanding")
            }
            DomainError::NoActiveClue => write!(f, "cannot make guess now: no active clue"),
            DomainError::OutOfBounds { row, col } => {
                write!(f, "cell ({row}, {col}) is off the board")
            }
            DomainError::AlreadyRevealed { row, col } => {
                write!(f, "card at ({row}, {col}) already revealed")
            }
        }
    }
}

impl Error for DomainError {}
