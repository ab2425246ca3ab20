//! Test logging initialization shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test-friendly tracing subscriber exactly once.
///
/// The filter is read from `TEST_LOG`, then `RUST_LOG`, and defaults to
/// `"warn"`. Setting `TEST_LOG_JSON=1` switches to the same JSON layout the
/// server binary uses, which helps when checking structured fields such as
/// `game_code` or `session_id`.
///
/// Safe to call from every test; later calls are no-ops and an already
/// installed global subscriber is left alone.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let json = std::env::var("TEST_LOG_JSON")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let builder = fmt()
            .with_env_filter(filter)
            .with_test_writer() // required for cargo test output capture
            .without_time();

        if json {
            builder.json().try_init().ok();
        } else {
            builder.try_init().ok();
        }
    });
}
