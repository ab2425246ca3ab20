//! Test support shared by the Duet backend test binaries.
//!
//! Kept free of backend types so integration tests can depend on it without
//! pulling a second copy of the backend crate into the build.

pub mod logging;
pub mod problem_details;
