//! Command-line interface for tictactoe_tiers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_tiers_core::Seat;

/// Tic-tac-toe with three AI difficulty tiers
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tiers")]
#[command(about = "Play tic-tac-toe against easy, medium or hard AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Who plays X: human, easy, medium or hard
        #[arg(long)]
        first: Option<Seat>,

        /// Who plays O: human, easy, medium or hard
        #[arg(long)]
        second: Option<Seat>,

        /// Seed for the AI random source
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run AI-vs-AI games and report the outcomes
    Simulate {
        /// Strategy playing X
        #[arg(long, default_value = "hard")]
        first: Seat,

        /// Strategy playing O
        #[arg(long, default_value = "hard")]
        second: Seat,

        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        games: u32,

        /// Seed for the AI random source
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
