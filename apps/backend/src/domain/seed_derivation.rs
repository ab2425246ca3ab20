//! RNG seed derivation for reproducible games.
//!
//! A single base seed (from configuration) fans out into one seed per game
//! code plus one seed for the code generator, so every board a server deals
//! can be replayed from the base seed and the code alone.

use crate::domain::game_code::GameCode;

/// Derive the board seed for one game.
///
/// Same base + same code = same board sequence. The code's bytes are folded
/// in with an FNV-1a style mix so codes differing in one letter diverge.
pub fn derive_board_seed(base_seed: u64, code: &GameCode) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in code.as_str().bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    base_seed ^ hash
}

/// Derive the seed for the game-code generator.
pub fn derive_code_seed(base_seed: u64) -> u64 {
    // Offset keeps the code stream apart from any board stream
    base_seed.wrapping_mul(0x9e37_79b9_7f4a_7c15).wrapping_add(1)
}
