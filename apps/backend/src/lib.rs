#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod game;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod trace_ctx;
pub mod ws;

// Re-exports for public API
pub use config::{ServerConfig, WsConfig};
pub use error::AppError;
pub use errors::ErrorCode;
pub use game::{GameActor, GameRegistry, RegistryConfig};
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
