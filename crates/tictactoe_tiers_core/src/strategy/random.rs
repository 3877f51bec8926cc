//! Easy tier: uniform random choice.

use crate::error::GameError;
use crate::position::Position;
use crate::types::Board;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Picks an empty cell uniformly at random.
pub fn select<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Position, GameError> {
    board
        .empty_cells()
        .choose(rng)
        .copied()
        .ok_or(GameError::NoLegalMove)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_only_picks_empty_cells() {
        let board = Board::new()
            .apply_move(Position::Center, Player::First)
            .unwrap()
            .apply_move(Position::TopLeft, Player::Second)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let pos = select(&board, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_reaches_every_empty_cell() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<Position> = (0..500).map(|_| select(&board, &mut rng).unwrap()).collect();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_single_empty_cell_is_forced() {
        let board = Position::ALL[..8].iter().fold(Board::new(), |board, &pos| {
            board.apply_move(pos, Player::First).unwrap()
        });
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(select(&board, &mut rng), Ok(Position::BottomRight));
    }
}
