//! Solved - command-line front end for the perfect-play engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use solved_session::{GameSession, SessionConfig, Tally};
use solved_tictactoe::{BoardState, Player, Position, choose_move};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Selfplay {
            games,
            seed,
            config,
        } => run_selfplay(games, seed, config),
        Command::BestMove { board, player } => run_best_move(&board, player),
        Command::Result { board } => run_result(&board),
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run a batch of engine-vs-engine games
#[instrument(skip(config_path))]
fn run_selfplay(
    games: Option<u32>,
    seed: Option<u64>,
    config_path: Option<std::path::PathBuf>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };
    if let Some(games) = games {
        config = config.with_games(games);
    }
    if seed.is_some() {
        config = config.with_seed(seed);
    }

    let mut rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };

    let mut session = GameSession::new(&config);
    session
        .scoreboard_mut()
        .subscribe(|tally: Tally, value: u32| {
            debug!(%tally, value, "Scoreboard updated");
        });

    info!(games = config.games(), "Starting self-play batch");
    for _ in 0..*config.games() {
        session.play_computer_vs_computer(&mut rng)?;
    }

    let snapshot = session.scoreboard().snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Print the engine's chosen cell for a position
#[instrument]
fn run_best_move(board: &str, player: Player) -> Result<()> {
    let mut board: BoardState = board.parse()?;
    let Some(cell) = choose_move(&mut board, player) else {
        bail!("Game is already over: {}", board.result());
    };

    match Position::from_cell(cell) {
        Some(position) => println!("{cell} ({position})"),
        None => println!("{cell}"),
    }
    Ok(())
}

/// Print the result and rendered board for a position
#[instrument]
fn run_result(board: &str) -> Result<()> {
    let board: BoardState = board.parse()?;
    println!("{}\n\n{}", board.result(), board);
    Ok(())
}
