//! Clear command implementation

use std::path::Path;

use colored::Colorize;

use super::external_root;
use crate::error::Result;

/// Run the clear command
///
/// Removes `<cwd>/external`. Fails, deleting nothing, unless the directory
/// exists and is empty.
pub fn run_clear(cwd: &Path) -> Result<()> {
    let root = external_root(cwd);

    println!(
        "{} Removing {}",
        "=>".blue().bold(),
        root.display().to_string().cyan()
    );

    extdeps_core::clear(&root)?;

    println!("{} Removed {}", "OK".green().bold(), root.display());
    Ok(())
}
