//! Win detection.

use crate::position::Position;
use crate::types::{Board, Player};

/// Three cells that win when held by one player.
pub type WinningLine = [Position; 3];

/// All winning lines in scan order: rows, columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the owner of the first complete line, if any.
pub fn winner(board: &Board) -> Option<Player> {
    WINNING_LINES.iter().find_map(|&line| line_owner(board, line))
}

/// Returns true if `player` holds every cell of some line.
pub fn has_won(board: &Board, player: Player) -> bool {
    WINNING_LINES
        .iter()
        .any(|&line| line_owner(board, line) == Some(player))
}

fn line_owner(board: &Board, [a, b, c]: WinningLine) -> Option<Player> {
    let mark = board.get(a);
    if mark == board.get(b) && mark == board.get(c) {
        mark.player()
    } else {
        None
    }
}
