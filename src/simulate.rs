//! Batch AI-vs-AI matches.

use anyhow::{Result, ensure};
use derive_getters::Getters;
use serde::Serialize;
use tictactoe_tiers_core::{GameStatus, Player, Seat, TurnController};
use tracing::{info, instrument};

/// Outcome counts over a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct Tally {
    first_wins: u32,
    second_wins: u32,
    draws: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::First) => self.first_wins += 1,
            GameStatus::Won(Player::Second) => self.second_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }
}

/// Result of a simulation run, as printed by `simulate --json`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Seat playing First.
    pub first: Seat,
    /// Seat playing Second.
    pub second: Seat,
    /// Outcome counts.
    pub tally: Tally,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} (X) vs {} (O), {} games", self.first, self.second, self.tally.games())?;
        writeln!(f, "  X wins: {}", self.tally.first_wins)?;
        writeln!(f, "  O wins: {}", self.tally.second_wins)?;
        write!(f, "  draws:  {}", self.tally.draws)
    }
}

/// Plays `games` complete games between the two AI seats of `controller`.
#[instrument(skip(controller))]
pub fn simulate(controller: &mut TurnController, games: u32) -> Result<Report> {
    let config = *controller.config();
    ensure!(
        config.first().is_ai() && config.second().is_ai(),
        "simulate needs two AI seats, got {} vs {}",
        config.first(),
        config.second()
    );

    let mut tally = Tally::default();
    for _ in 0..games {
        let state = controller.play_out()?;
        tally.record(state.status());
    }

    info!(?tally, "Simulation finished");
    Ok(Report {
        first: config.first(),
        second: config.second(),
        tally,
    })
}
