//! Medium tier: take a win, else block, else play randomly.

use super::random;
use crate::error::GameError;
use crate::position::Position;
use crate::rules::{WINNING_LINES, WinningLine};
use crate::types::{Board, Mark, Player};
use rand::Rng;
use tracing::debug;

/// Picks a move for `player`.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first match wins,
/// so the choice is deterministic whenever a win or block exists.
pub fn select<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<Position, GameError> {
    if let Some(pos) = completing_cell(board, player) {
        debug!(%pos, "Taking winning cell");
        return Ok(pos);
    }
    if let Some(pos) = completing_cell(board, player.opponent()) {
        debug!(%pos, "Blocking opponent");
        return Ok(pos);
    }
    random::select(board, rng)
}

/// The empty cell that would give `player` a complete line, if any.
pub fn completing_cell(board: &Board, player: Player) -> Option<Position> {
    WINNING_LINES
        .iter()
        .find_map(|&line| line_gap(board, line, Mark::from(player)))
}

fn line_gap(board: &Board, [a, b, c]: WinningLine, mark: Mark) -> Option<Position> {
    [(a, b, c), (a, c, b), (b, c, a)]
        .into_iter()
        .find(|&(x, y, gap)| board.get(x) == mark && board.get(y) == mark && board.is_empty(gap))
        .map(|(_, _, gap)| gap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const E: Mark = Mark::Empty;
    const F: Mark = Mark::First;
    const S: Mark = Mark::Second;

    #[test]
    fn test_blocks_open_row() {
        let board = Board::from_marks([F, F, E, S, E, E, E, E, E]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(select(&board, Player::Second, &mut rng), Ok(Position::TopRight));
    }

    #[test]
    fn test_prefers_win_over_block() {
        let board = Board::from_marks([F, F, E, S, S, E, E, E, E]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            select(&board, Player::Second, &mut rng),
            Ok(Position::MiddleRight)
        );
    }

    #[test]
    fn test_finds_gap_in_middle_of_line() {
        let board = Board::from_marks([S, E, E, E, E, E, S, E, E]);
        assert_eq!(completing_cell(&board, Player::Second), Some(Position::MiddleLeft));
        assert_eq!(completing_cell(&board, Player::First), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Second can finish the middle row or the left column; rows come first.
        let board = Board::from_marks([S, F, F, S, S, E, E, F, F]);
        assert_eq!(completing_cell(&board, Player::Second), Some(Position::MiddleRight));
    }
}
