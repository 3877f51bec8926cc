//! Tiered tic-tac-toe - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_tiers::{AppConfig, PlayerNames, simulate};
use tictactoe_tiers_core::{GameConfig, Seat, TurnController};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            first,
            second,
            seed,
        } => run_play(config, first, second, seed),
        Command::Simulate {
            first,
            second,
            games,
            seed,
            json,
        } => run_simulate(first, second, games, seed, json),
    }
}

/// Creates a controller, seeded when a seed is given.
fn controller(config: GameConfig, seed: Option<u64>) -> TurnController {
    match seed {
        Some(seed) => TurnController::seeded(config, seed),
        None => TurnController::new(config),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    config_path: Option<PathBuf>,
    first: Option<Seat>,
    second: Option<Seat>,
    seed: Option<u64>,
) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(first, second, seed);

    let names = PlayerNames::new(
        config.first().name().as_deref(),
        config.second().name().as_deref(),
    );
    info!(first = %config.first_seat(), second = %config.second_seat(), "Starting interactive game");

    let mut controller = controller(config.game_config(), *config.seed());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    tictactoe_tiers::run(&mut controller, &names, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Run a batch of AI-vs-AI games
#[instrument]
fn run_simulate(first: Seat, second: Seat, games: u32, seed: Option<u64>, json: bool) -> Result<()> {
    let mut controller = controller(GameConfig::new(first, second), seed);
    let report = simulate(&mut controller, games)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
