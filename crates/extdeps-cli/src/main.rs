//! External sources fetcher
//!
//! Clones or updates the third-party repositories the downstream build
//! expects under `./external`.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{}: tracing subscriber already installed", "warning".yellow());
        }
        tracing::debug!("Verbose mode enabled");
    }

    let cwd = std::env::current_dir()?;

    if cli.clear {
        commands::run_clear(&cwd)
    } else {
        commands::run_fetch(&cwd, cli.force)
    }
}
