use crate::domain::board::{CardKind, Position};
use crate::domain::engine::{GameEngine, GuessResult, Phase, Player, MAX_MOVES};
use crate::domain::test_prelude::{scripted_board, scripted_greens};
use crate::errors::domain::DomainError;

fn scripted() -> GameEngine {
    GameEngine::with_board(scripted_board())
}

#[test]
fn fresh_engine_awaits_a_clue() {
    let engine = scripted();
    assert_eq!(engine.phase(), Phase::AwaitingClue);
    assert_eq!(engine.turn_owner(), Player::One);
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.max_moves(), MAX_MOVES);
    assert_eq!(engine.guesses_remaining(), 0);
    assert!(engine.clue().is_none());
}

#[test]
fn clue_grants_a_bonus_guess_and_spends_a_move() {
    let mut engine = scripted();
    let clue = engine.give_clue("WATER", 3).unwrap();

    assert_eq!(clue.word, "WATER");
    assert_eq!(engine.guesses_remaining(), 4);
    assert_eq!(engine.move_count(), 1);
    assert_eq!(engine.clue(), Some(&clue));
    assert_eq!(engine.phase(), Phase::AwaitingGuesses);
}

#[test]
fn second_clue_is_refused_while_guesses_remain() {
    let mut engine = scripted();
    engine.give_clue("WATER", 3).unwrap();

    let err = engine.give_clue("FIRE", 2).unwrap_err();
    assert_eq!(err, DomainError::GuessesOutstanding { remaining: 4 });
    assert_eq!(engine.move_count(), 1);
    assert_eq!(engine.clue().map(|c| c.word.as_str()), Some("WATER"));
    assert_eq!(engine.guesses_remaining(), 4);
}

#[test]
fn guess_without_clue_is_refused() {
    let mut engine = scripted();
    assert_eq!(engine.make_guess(1, 0), Err(DomainError::NoActiveClue));
    assert_eq!(engine.board().revealed_count(), 0);
}

#[test]
fn off_board_guess_is_refused() {
    let mut engine = scripted();
    engine.give_clue("WATER", 1).unwrap();
    assert_eq!(
        engine.make_guess(5, 0),
        Err(DomainError::OutOfBounds { row: 5, col: 0 })
    );
    assert_eq!(engine.guesses_remaining(), 2);
}

#[test]
fn repeat_guess_fails_without_spending_a_guess() {
    let mut engine = scripted();
    engine.give_clue("WATER", 3).unwrap();
    engine.make_guess(1, 0).unwrap();
    assert_eq!(engine.guesses_remaining(), 3);

    let err = engine.make_guess(1, 0).unwrap_err();
    assert_eq!(err, DomainError::AlreadyRevealed { row: 1, col: 0 });
    assert_eq!(err.to_string(), "card at (1, 0) already revealed");
    assert_eq!(engine.guesses_remaining(), 3);
    assert_eq!(engine.revealed_green(), 1);
}

#[test]
fn green_guess_keeps_the_turn() {
    let mut engine = scripted();
    engine.give_clue("WATER", 2).unwrap();

    let outcome = engine.make_guess(2, 2).unwrap();
    assert_eq!(outcome.result, GuessResult::Green);
    assert_eq!(outcome.position, Position::new(2, 2).unwrap());
    assert!(!outcome.turn_ended);
    assert!(!outcome.game_over);
    assert_eq!(engine.turn_owner(), Player::One);
    assert_eq!(engine.guesses_remaining(), 2);
}

#[test]
fn neutral_guess_ends_the_turn() {
    let mut engine = scripted();
    engine.give_clue("WATER", 3).unwrap();

    let outcome = engine.make_guess(0, 3).unwrap();
    assert_eq!(outcome.result, GuessResult::Neutral);
    assert!(outcome.turn_ended);
    assert_eq!(engine.guesses_remaining(), 0);
    assert_eq!(engine.turn_owner(), Player::Two);
    assert!(engine.clue().is_none());
    assert_eq!(engine.phase(), Phase::AwaitingClue);
}

#[test]
fn spending_the_last_guess_on_green_ends_the_turn() {
    let mut engine = scripted();
    engine.give_clue("WATER", 1).unwrap();

    assert!(!engine.make_guess(1, 0).unwrap().turn_ended);
    let outcome = engine.make_guess(1, 1).unwrap();
    assert!(outcome.turn_ended);
    assert_eq!(engine.turn_owner(), Player::Two);
    assert!(engine.clue().is_none());
    assert_eq!(engine.phase(), Phase::AwaitingClue);
}

#[test]
fn assassin_loses_immediately() {
    let mut engine = scripted();
    engine.give_clue("WATER", 3).unwrap();

    let outcome = engine.make_guess(0, 1).unwrap();
    assert_eq!(outcome.result, GuessResult::Assassin);
    assert!(outcome.game_over);
    assert!(!outcome.won);
    assert_eq!(engine.phase(), Phase::GameOver { won: false });
}

#[test]
fn fifteenth_green_wins_in_the_same_call() {
    let mut engine = scripted();
    let mut last = None;

    for (i, (row, col)) in scripted_greens().enumerate() {
        if engine.guesses_remaining() == 0 {
            engine.give_clue("WATER", 5).unwrap();
        }
        let outcome = engine.make_guess(row, col).unwrap();
        if i < 14 {
            assert!(!outcome.game_over, "game ended early at green #{}", i + 1);
        }
        last = Some(outcome);
    }

    let last = last.unwrap();
    assert!(last.game_over && last.won);
    assert!(!last.turn_ended);
    assert_eq!(engine.revealed_green(), 15);
    assert_eq!(engine.phase(), Phase::GameOver { won: true });
    // Leftover guesses are left as decremented; they no longer matter.
    assert_eq!(engine.guesses_remaining(), 3);
}

#[test]
fn nine_clues_without_clearing_the_board_loses_on_time() {
    let mut engine = scripted();

    for clue_no in 1..=MAX_MOVES {
        engine.give_clue("WATER", 1).unwrap();
        engine.end_turn().unwrap();
        if clue_no < MAX_MOVES {
            assert!(!engine.is_game_over(), "ended after clue {clue_no}");
        }
    }

    assert!(engine.is_game_over());
    assert!(!engine.is_won());
    assert_eq!(engine.move_count(), MAX_MOVES);
}

#[test]
fn timeout_also_triggers_when_a_guess_ends_the_last_turn() {
    let mut engine = scripted();
    for _ in 1..MAX_MOVES {
        engine.give_clue("WATER", 1).unwrap();
        engine.end_turn().unwrap();
    }
    engine.give_clue("WATER", 2).unwrap();
    engine.make_guess(1, 0).unwrap();
    assert!(!engine.is_game_over());

    let outcome = engine.make_guess(4, 4).unwrap();
    assert_eq!(outcome.result, GuessResult::Neutral);
    assert!(outcome.game_over);
    assert!(!outcome.won);
}

#[test]
fn end_turn_is_allowed_without_an_active_clue() {
    let mut engine = scripted();
    engine.end_turn().unwrap();
    assert_eq!(engine.turn_owner(), Player::Two);
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.phase(), Phase::AwaitingClue);
}

#[test]
fn end_turn_discards_remaining_guesses() {
    let mut engine = scripted();
    engine.give_clue("WATER", 4).unwrap();
    engine.make_guess(1, 0).unwrap();
    engine.end_turn().unwrap();

    assert_eq!(engine.guesses_remaining(), 0);
    assert!(engine.clue().is_none());
    assert_eq!(engine.turn_owner(), Player::Two);
}

#[test]
fn finished_game_refuses_every_command() {
    let mut engine = scripted();
    engine.give_clue("WATER", 3).unwrap();
    engine.make_guess(0, 0).unwrap();
    let before = engine.snapshot();

    assert_eq!(engine.give_clue("FIRE", 1), Err(DomainError::GameOver));
    assert_eq!(engine.make_guess(1, 0), Err(DomainError::GameOver));
    assert_eq!(engine.end_turn(), Err(DomainError::GameOver));
    assert_eq!(DomainError::GameOver.to_string(), "cannot act, game over");
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn reset_deals_a_fresh_game() {
    let mut engine = GameEngine::seeded(42);
    let first_words: Vec<&str> = engine.board().rows().flatten().map(|c| c.word()).collect();

    engine.give_clue("WATER", 1).unwrap();
    engine.end_turn().unwrap();
    engine.reset();

    assert_eq!(engine.phase(), Phase::AwaitingClue);
    assert_eq!(engine.turn_owner(), Player::One);
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.revealed_green(), 0);
    assert_eq!(engine.board().revealed_count(), 0);
    assert_eq!(engine.board().count_kind(CardKind::Green), 15);

    let second_words: Vec<&str> = engine.board().rows().flatten().map(|c| c.word()).collect();
    assert_ne!(first_words, second_words);
}

#[test]
fn same_seed_deals_the_same_boards() {
    let mut a = GameEngine::seeded(2024);
    let mut b = GameEngine::seeded(2024);
    assert_eq!(a.board(), b.board());
    a.reset();
    b.reset();
    assert_eq!(a.board(), b.board());
}
