//! Fetch command implementation

use std::path::Path;

use colored::Colorize;
use extdeps_core::{CommandRunner, Registry, SyncOptions, Synchronizer};

use super::external_root;
use crate::error::Result;

/// Run the fetch command
///
/// Clones or updates every built-in source under `<cwd>/external`.
pub fn run_fetch(cwd: &Path, force: bool) -> Result<()> {
    let registry = Registry::builtin()?;
    let synchronizer = Synchronizer::with_git(external_root(cwd));

    run_fetch_with(&synchronizer, &registry, SyncOptions { force })
}

/// Fetch `registry` with a caller-supplied synchronizer.
pub fn run_fetch_with<R: CommandRunner>(
    synchronizer: &Synchronizer<R>,
    registry: &Registry,
    options: SyncOptions,
) -> Result<()> {
    println!(
        "{} Fetching {} sources into {}{}",
        "=>".blue().bold(),
        registry.len(),
        synchronizer.root().display().to_string().cyan(),
        if options.force { " (forced)".yellow().to_string() } else { String::new() }
    );

    let report = synchronizer.sync_all(registry, options)?;

    for source in &report.sources {
        let action = if source.cloned { "cloned" } else { "updated" };
        println!(
            "   {} {} {} at {}",
            "-".green(),
            source.directory.cyan(),
            action,
            source.checked_out.dimmed()
        );
    }

    println!(
        "{} {} sources synchronized ({} cloned)",
        "OK".green().bold(),
        report.sources.len(),
        report.cloned_count()
    );

    Ok(())
}
