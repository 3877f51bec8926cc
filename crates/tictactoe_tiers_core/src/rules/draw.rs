//! Draw detection.

use crate::types::Board;

/// Checks if every cell is marked.
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|mark| !mark.is_empty())
}
