//! Command-line interface for gridlock.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gridlock - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "gridlock")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if it is missing)
    #[arg(short, long, default_value = "gridlock.toml", global = true)]
    pub config: PathBuf,

    /// Override the configured log filter (RUST_LOG still wins)
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Presentation mode; the terminal UI when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the full-screen terminal UI
    Tui,

    /// Play in line mode on stdin/stdout
    Console {
        /// Also print a JSON snapshot after every move
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["gridlock"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("gridlock.toml"));
    }

    #[test]
    fn test_console_with_json() {
        let cli =
            Cli::try_parse_from(["gridlock", "console", "--json", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.command, Some(Command::Console { json: true }));
        assert_eq!(cli.config, PathBuf::from("x.toml"));
    }
}
