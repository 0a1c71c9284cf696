//! Root CLI parser.
//!
//! Global options live here; the subcommands are defined in
//! [`crate::commands`].

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;

/// Command-line interface definition for the simplifier launcher.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "simplaunch")]
#[command(about = "Deploy dependencies for and run the external mesh simplifier")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON file with launcher configuration overrides
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_args_parse() {
        let cli = Cli::parse_from([
            "simplaunch",
            "--verbose",
            "--config",
            "/tmp/launcher.json",
            "paths",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/launcher.json")));
    }
}
