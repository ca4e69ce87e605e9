//! Command-line interface for tictactoe_minimax.

use tictactoe_minimax::{Difficulty, GameMode, Player};
use clap::{Parser, Subcommand};

/// Tic-tac-toe against a random or minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Play tic-tac-toe against a random or unbeatable engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Path to an engine config file (TOML); defaults apply if missing
        #[arg(short, long, default_value = "engine.toml")]
        config: std::path::PathBuf,

        /// Engine strategy (random or optimal)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Game mode (ai or pvp)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Side the engine plays (one or two)
        #[arg(long)]
        identity: Option<Player>,

        /// Seed for the random strategy
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the engine's move for a board
    BestMove {
        /// Nine cells: X, O, or . for empty (e.g. "XX.OO....")
        #[arg(short, long)]
        board: String,

        /// Engine strategy (random or optimal)
        #[arg(short, long, default_value = "optimal")]
        difficulty: Difficulty,

        /// Seed for the random strategy
        #[arg(long)]
        seed: Option<u64>,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },
}
