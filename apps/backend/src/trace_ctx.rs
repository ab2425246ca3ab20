//! Task-local trace context for web requests.
//!
//! `RequestTrace` runs every request inside [`with_trace_id`], so anything on
//! the request's task (handlers, extractors, error rendering) can read the id
//! with [`trace_id`]. Core game code does not import this module.

use std::cell::RefCell;

use tokio::task_local;

/// Response header carrying the trace id on error responses.
pub const TRACE_HEADER: &str = "x-trace-id";

const UNKNOWN: &str = "unknown";

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Trace id for the current task, or `"unknown"` outside a request.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Run `future` with `trace_id` installed as the task-local trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}
