//! Core of the external sources fetcher
//!
//! - **Descriptors and registry**: the data-only table of repositories to
//!   fetch ([`SourceDescriptor`], [`Registry`])
//! - **Synchronizer**: clone-if-absent, then fetch and checkout of the
//!   configured remote reference ([`Synchronizer`])
//! - **Clear**: non-recursive removal of the external directory ([`clear`])
//!
//! ```text
//!        extdeps-cli
//!             |
//!        extdeps-core
//!             |
//!        extdeps-git  ->  git (subprocess)
//! ```

pub mod clear;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod sync;

pub use clear::clear;
pub use descriptor::SourceDescriptor;
pub use extdeps_git::{CommandRunner, GitCli};
pub use error::{Error, Result};
pub use registry::{BUILTIN_SOURCES, EXTERNAL_DIR_NAME, Registry};
pub use sync::{SourceOutcome, SyncOptions, SyncReport, Synchronizer};
