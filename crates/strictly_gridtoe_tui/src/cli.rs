//! Command-line interface for strictly_gridtoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Gridtoe - tic-tac-toe on any grid, with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_gridtoe")]
#[command(about = "Tic-tac-toe on an M×N grid with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Number of rows (3-15)
        #[arg(long)]
        rows: Option<usize>,

        /// Number of columns (3-15)
        #[arg(long)]
        cols: Option<usize>,

        /// List newest moves first
        #[arg(long)]
        descending: bool,
    },

    /// Replay moves without a terminal UI and print the result
    Script {
        /// Number of rows (3-15)
        #[arg(long)]
        rows: Option<usize>,

        /// Number of columns (3-15)
        #[arg(long)]
        cols: Option<usize>,

        /// Print the final view as JSON
        #[arg(long)]
        json: bool,

        /// Comma-separated cell indices; `jN` jumps to move N
        moves: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            rows: None,
            cols: None,
            descending: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let cli = Cli::parse_from(["strictly_gridtoe"]);
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::parse_from([
            "strictly_gridtoe",
            "play",
            "--rows",
            "5",
            "--descending",
            "--config",
            "game.toml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(
            cli.command,
            Some(Command::Play {
                rows: Some(5),
                cols: None,
                descending: true
            })
        );
    }

    #[test]
    fn test_script_args() {
        let cli = Cli::parse_from(["strictly_gridtoe", "script", "--json", "0,4,8"]);
        assert_eq!(
            cli.command,
            Some(Command::Script {
                rows: None,
                cols: None,
                json: true,
                moves: "0,4,8".to_string()
            })
        );
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
