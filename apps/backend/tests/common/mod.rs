#![allow(dead_code)]

// tests/common/mod.rs
use std::time::Duration;

use serde_json::Value;

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Default wait for anything delivered through an actor mailbox.
pub const EVENT_TIMEOUT: Duration = Duration::from_secs(2);

/// Fixed base seed so boards are reproducible across runs.
pub const TEST_SEED: u64 = 0x5eed_d0e7;

/// Assert the camelCase wire snapshot shape shared by every response.
pub fn assert_wire_state(state: &Value) {
    for key in [
        "board",
        "moves",
        "maxMoves",
        "gameOver",
        "won",
        "currentPlayer",
        "clue",
        "guessesLeft",
        "gameCode",
        "playerCount",
    ] {
        assert!(state.get(key).is_some(), "{key} missing from {state}");
    }

    let rows = state["board"].as_array().expect("board should be an array");
    assert_eq!(rows.len(), 5);
    for row in rows {
        let cells = row.as_array().expect("board row should be an array");
        assert_eq!(cells.len(), 5);
        for cell in cells {
            if cell["revealed"] == false {
                assert_eq!(cell["type"], "neutral", "unrevealed kind leaked: {cell}");
            }
        }
    }
}
