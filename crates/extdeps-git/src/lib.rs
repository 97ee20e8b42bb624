//! git invocation layer for the external sources fetcher
//!
//! Builds the clone/fetch/checkout argument vocabulary and runs it through a
//! [`CommandRunner`]. Every invocation carries its own working directory, so
//! nothing here touches the process-wide current directory.

pub mod error;
pub mod invocation;
pub mod runner;

pub use error::{Error, Result};
pub use invocation::{GitInvocation, ORIGIN, remote_ref};
pub use runner::{CommandRunner, GitCli};
