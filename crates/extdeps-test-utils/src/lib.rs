//! Shared test utilities for the extdeps workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: local upstream repositories that can be cloned over `file://`
//! - [`runner`]: [`RecordingRunner`](runner::RecordingRunner), a
//!   `CommandRunner` that records invocations instead of running git

pub mod git;
pub mod runner;
