//! Command-line interface for time_travel_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use time_travel_tictactoe::OutputFormat;

/// Time-travel tic-tac-toe - play, rewind and branch from the terminal
#[derive(Parser, Debug)]
#[command(name = "time_travel_tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play,

    /// Apply a list of moves and print the resulting view
    Replay {
        /// Cell indices 0-8, comma separated (e.g. 0,4,1,5,2)
        #[arg(
            short,
            long,
            value_delimiter = ',',
            value_parser = clap::value_parser!(u8).range(0..=8)
        )]
        moves: Vec<u8>,

        /// Jump to this step after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,
    },

    /// Print the winner of a board given as 9 characters (X, O, or . for empty)
    Winner {
        /// Board in row-major order, e.g. "XXXOO...."
        board: String,
    },
}
