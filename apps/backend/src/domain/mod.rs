//! Domain layer: pure game logic types and helpers.

pub mod board;
pub mod engine;
pub mod game_code;
pub mod seed_derivation;
pub mod snapshot;
pub mod words;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_engine;
#[cfg(test)]
mod tests_props_board;

// Re-exports for ergonomics
pub use board::{Board, Card, CardKind, Position};
pub use engine::{Clue, GameEngine, GuessOutcome, GuessResult, Phase, Player, MAX_MOVES};
pub use game_code::{GameCode, InvalidGameCode};
pub use seed_derivation::{derive_board_seed, derive_code_seed};
pub use snapshot::{CardView, EngineSnapshot};
