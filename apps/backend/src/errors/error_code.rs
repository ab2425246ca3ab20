//! Error codes for the Duet backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and maps 1:1 to the string that
//! appears in HTTP responses.

use core::fmt;

/// Centralized error codes for the Duet backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Game code is not six alternating consonant/vowel letters
    InvalidGameCode,
    /// Clue word or number outside the accepted shape
    InvalidClue,
    /// Guess coordinates outside the board
    InvalidGuess,
    /// General bad request error (unparseable body, wrong JSON types)
    BadRequest,

    // Resource Not Found
    /// No game has been started under this code
    GameNotFound,

    // System Errors
    /// A game actor stopped or its mailbox rejected the command
    GameUnavailable,
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGameCode => "INVALID_GAME_CODE",
            Self::InvalidClue => "INVALID_CLUE",
            Self::InvalidGuess => "INVALID_GUESS",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",

            Self::GameUnavailable => "GAME_UNAVAILABLE",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
