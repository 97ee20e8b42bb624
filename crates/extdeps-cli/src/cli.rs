//! CLI argument parsing using clap derive

use clap::Parser;

/// Fetch external source dependencies into ./external
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "fetch-sources")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Remove the folder the sources are fetched into (must be empty)
    #[arg(long)]
    pub clear: bool,

    /// Pass --force to git fetch and checkout
    #[arg(long)]
    pub force: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_plain_fetch() {
        let cli = Cli::parse_from(["fetch-sources"]);
        assert_eq!(
            cli,
            Cli {
                clear: false,
                force: false,
                verbose: false
            }
        );
    }

    #[test]
    fn parses_force_and_clear() {
        let cli = Cli::parse_from(["fetch-sources", "--force", "--clear", "-v"]);
        assert!(cli.force);
        assert!(cli.clear);
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["fetch-sources", "imgui"]).is_err());
    }
}
