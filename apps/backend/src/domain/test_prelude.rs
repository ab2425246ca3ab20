//! Shared helpers for domain tests.

use std::env;

use proptest::prelude::ProptestConfig;

use crate::domain::board::{Board, CardKind, CELL_COUNT};

/// Proptest config honoring `PROPTEST_CASES` (low default for fast CI).
pub fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Fixed layout for scripted games:
/// - row 0: assassins at (0,0), (0,1), (0,2); neutrals at (0,3), (0,4)
/// - rows 1-3: all green (15 cards)
/// - row 4: neutral
pub fn scripted_board() -> Board {
    let mut kinds = [CardKind::Neutral; CELL_COUNT];
    kinds[0] = CardKind::Assassin;
    kinds[1] = CardKind::Assassin;
    kinds[2] = CardKind::Assassin;
    for kind in &mut kinds[5..20] {
        *kind = CardKind::Green;
    }
    Board::from_kinds(kinds)
}

/// Green positions of [`scripted_board`] in row-major order.
pub fn scripted_greens() -> impl Iterator<Item = (usize, usize)> {
    (1..4).flat_map(|row| (0..5).map(move |col| (row, col)))
}
