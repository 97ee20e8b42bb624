//! Command implementations for extdeps-cli

pub mod clear;
pub mod fetch;

pub use clear::run_clear;
pub use fetch::run_fetch;

use std::path::{Path, PathBuf};

use extdeps_core::EXTERNAL_DIR_NAME;

/// The external root for an invocation from `cwd`.
pub fn external_root(cwd: &Path) -> PathBuf {
    cwd.join(EXTERNAL_DIR_NAME)
}
