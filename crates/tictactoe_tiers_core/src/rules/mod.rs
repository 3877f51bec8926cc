//! Game rules.
//!
//! Pure functions for classifying a board. Rules are kept apart from
//! board storage so strategies and the turn controller share one
//! definition of "won" and "drawn".

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, WinningLine, has_won, winner};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
///
/// A win takes precedence over a full board. When several lines are
/// complete the first one in [`WINNING_LINES`] order decides the winner.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Won(player)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
