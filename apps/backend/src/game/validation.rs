//! Shape checks applied before a command reaches the engine.

use lazy_regex::regex_is_match;
use thiserror::Error;

use crate::domain::board::BOARD_SIZE;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::game::messages::{GiveClue, MakeGuess};

pub const MAX_CLUE_LEN: usize = 50;
pub const MIN_CLUE_NUMBER: i64 = 1;
pub const MAX_CLUE_NUMBER: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("clue must be 1-{MAX_CLUE_LEN} letters (A-Z only)")]
    ClueWord,
    #[error("clue number must be between {MIN_CLUE_NUMBER} and {MAX_CLUE_NUMBER}")]
    ClueNumber,
    #[error("guess must target row and column 0-4")]
    GuessCell,
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::ClueWord | ValidationError::ClueNumber => ErrorCode::InvalidClue,
            ValidationError::GuessCell => ErrorCode::InvalidGuess,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::invalid(err.code(), err.to_string())
    }
}

pub fn validate_clue(word: &str, number: i64) -> Result<GiveClue, ValidationError> {
    if word.len() > MAX_CLUE_LEN || !regex_is_match!(r"^[A-Za-z]+$", word) {
        return Err(ValidationError::ClueWord);
    }
    let number = u8::try_from(number)
        .ok()
        .filter(|n| (MIN_CLUE_NUMBER..=MAX_CLUE_NUMBER).contains(&i64::from(*n)))
        .ok_or(ValidationError::ClueNumber)?;

    Ok(GiveClue {
        word: word.to_string(),
        number,
    })
}

pub fn validate_guess(row: i64, col: i64) -> Result<MakeGuess, ValidationError> {
    let cell = |v: i64| usize::try_from(v).ok().filter(|v| *v < BOARD_SIZE);
    match (cell(row), cell(col)) {
        (Some(row), Some(col)) => Ok(MakeGuess { row, col }),
        _ => Err(ValidationError::GuessCell),
    }
}
