//! Property tests for board generation and guess bookkeeping (pure domain).

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::board::{
    Board, CardKind, Position, ASSASSIN_COUNT, BOARD_SIZE, GREEN_COUNT, NEUTRAL_COUNT,
};
use crate::domain::engine::{GameEngine, GuessResult};
use crate::domain::test_prelude;
use crate::domain::words::WORDS;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Every board has 15 green, 3 assassin, 7 neutral and 25 distinct words.
    #[test]
    fn prop_board_composition(seed in any::<u64>()) {
        let board = Board::generate(&mut ChaCha8Rng::seed_from_u64(seed), WORDS);

        prop_assert_eq!(board.count_kind(CardKind::Green), GREEN_COUNT);
        prop_assert_eq!(board.count_kind(CardKind::Assassin), ASSASSIN_COUNT);
        prop_assert_eq!(board.count_kind(CardKind::Neutral), NEUTRAL_COUNT);

        let words: HashSet<&str> = board.rows().flatten().map(|c| c.word()).collect();
        prop_assert_eq!(words.len(), BOARD_SIZE * BOARD_SIZE);
        prop_assert_eq!(board.revealed_count(), 0);
    }

    /// Revealed flags only ever go from false to true, and failed guesses
    /// leave the guess budget untouched.
    #[test]
    fn prop_reveals_are_monotone(
        seed in any::<u64>(),
        guesses in prop::collection::vec((0usize..5, 0usize..5), 1..40),
    ) {
        let mut engine = GameEngine::seeded(seed);
        let mut seen: HashSet<Position> = HashSet::new();

        for (row, col) in guesses {
            if engine.is_game_over() {
                break;
            }
            if engine.guesses_remaining() == 0 {
                engine.give_clue("PROBE", 5).unwrap();
            }

            let before = engine.guesses_remaining();
            let pos = Position::new(row, col).unwrap();
            match engine.make_guess(row, col) {
                Ok(outcome) => {
                    prop_assert!(seen.insert(pos), "cell {pos:?} revealed twice");
                    prop_assert_eq!(outcome.result, GuessResult::from(engine.board().card(pos).kind()));
                }
                Err(_) => {
                    prop_assert!(seen.contains(&pos));
                    prop_assert_eq!(engine.guesses_remaining(), before);
                }
            }

            for revealed in &seen {
                prop_assert!(engine.board().card(*revealed).is_revealed());
            }
            prop_assert_eq!(engine.board().revealed_count(), seen.len());
        }
    }
}
