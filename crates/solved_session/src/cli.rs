//! Command-line interface for the `solved` binary.

use clap::{Parser, Subcommand};
use solved_tictactoe::Player;
use std::path::PathBuf;

/// Solved - perfect-play tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "solved")]
#[command(about = "Perfect-play tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play engine-vs-engine games and print the scoreboard as JSON
    Selfplay {
        /// Number of games (overrides the config file)
        #[arg(short, long)]
        games: Option<u32>,

        /// Seed for the random openings (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a session config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the engine's move for a position
    BestMove {
        /// Board as nine cells, e.g. "X.O/.X./..."
        #[arg(short, long)]
        board: String,

        /// Side to move (X or O)
        #[arg(short, long, value_parser = parse_player)]
        player: Player,
    },

    /// Print the result of a position
    Result {
        /// Board as nine cells, e.g. "XXX/OO./..."
        #[arg(short, long)]
        board: String,
    },
}

fn parse_player(s: &str) -> Result<Player, String> {
    Player::from_mark(s).ok_or_else(|| format!("expected X or O, got {:?}", s))
}
