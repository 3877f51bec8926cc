//! Move selection strategies for computer-controlled players.
//!
//! Every strategy has the same contract: given a board with at least one
//! empty cell and the acting player, return an empty cell. The input board
//! is never modified.

pub mod heuristic;
pub mod random;
pub mod search;

use crate::error::GameError;
use crate::position::Position;
use crate::types::{Board, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The three AI difficulty tiers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Strategy {
    /// Uniform choice among empty cells ("easy").
    #[serde(alias = "easy")]
    #[strum(to_string = "random", serialize = "easy")]
    Random,
    /// Win, else block, else random ("medium").
    #[serde(alias = "medium")]
    #[strum(to_string = "heuristic", serialize = "medium")]
    Heuristic,
    /// Exhaustive minimax ("hard").
    #[serde(alias = "hard")]
    #[strum(to_string = "search", serialize = "hard")]
    Search,
}

impl Strategy {
    /// Parses a strategy or difficulty name.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownStrategy`] for any other name.
    #[instrument]
    pub fn parse(name: &str) -> Result<Self, GameError> {
        name.trim()
            .parse()
            .map_err(|_| GameError::UnknownStrategy(name.to_string()))
    }

    /// Difficulty label shown to players.
    pub fn difficulty(self) -> &'static str {
        match self {
            Strategy::Random => "easy",
            Strategy::Heuristic => "medium",
            Strategy::Search => "hard",
        }
    }

    /// Picks a move for `player` on `board`.
    ///
    /// `rng` is only consulted by the random and heuristic tiers.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMove`] if the board is full.
    #[instrument(skip(board, rng), fields(strategy = %self))]
    pub fn select_move<R: Rng + ?Sized>(
        self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Result<Position, GameError> {
        let pos = match self {
            Strategy::Random => random::select(board, rng)?,
            Strategy::Heuristic => heuristic::select(board, player, rng)?,
            Strategy::Search => search::select(board, player)?,
        };
        debug!(%pos, ?player, "Strategy chose position");
        Ok(pos)
    }
}
