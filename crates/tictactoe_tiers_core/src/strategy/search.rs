//! Hard tier: exhaustive minimax.
//!
//! Scores are always from Second's point of view: a Second win is
//! [`WIN_SCORE`], a First win is `-WIN_SCORE`, a draw is zero. There is no
//! depth discount, so a win in one ply and a win in five plies score the same.

use crate::error::GameError;
use crate::position::Position;
use crate::rules::{self, has_won};
use crate::types::{Board, GameStatus, Player};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Score of a board won by Second.
pub const WIN_SCORE: i8 = 10;

/// Picks the best move for `player`.
///
/// Every legal move is scored and the first one (in ascending cell order)
/// with the best score for `player` is returned. Without a depth discount a
/// fork can tie with a win in one, so Second takes an immediate win directly.
pub fn select(board: &Board, player: Player) -> Result<Position, GameError> {
    let moves = board.empty_cells();
    if moves.is_empty() {
        return Err(GameError::NoLegalMove);
    }

    if player == Player::Second
        && let Some(pos) = moves
            .iter()
            .copied()
            .find(|&pos| has_won(&board.place(pos, player), player))
    {
        debug!(%pos, "Immediate win available");
        return Ok(pos);
    }

    let mut best: Option<(Position, i8)> = None;
    for (pos, score) in score_moves(board, player) {
        let better = match best {
            None => true,
            Some((_, best_score)) => prefers(player, score, best_score),
        };
        if better {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, _)| pos).ok_or(GameError::NoLegalMove)
}

/// Scores every legal move for `player`, in ascending cell order.
#[instrument(skip(board))]
pub fn score_moves(board: &Board, player: Player) -> Vec<(Position, i8)> {
    let mut minimax = Minimax::default();
    let scored: Vec<(Position, i8)> = board
        .empty_cells()
        .into_iter()
        .map(|pos| (pos, minimax.score(board.place(pos, player), player.opponent())))
        .collect();
    debug!(nodes = minimax.nodes, cached = minimax.cache.len(), ?scored, "Search finished");
    scored
}

/// Terminal score of a status, `None` while the game is in progress.
pub fn terminal_score(status: GameStatus) -> Option<i8> {
    match status {
        GameStatus::Won(Player::Second) => Some(WIN_SCORE),
        GameStatus::Won(Player::First) => Some(-WIN_SCORE),
        GameStatus::Draw => Some(0),
        GameStatus::InProgress => None,
    }
}

/// Second maximises, First minimises.
fn prefers(player: Player, candidate: i8, current: i8) -> bool {
    match player {
        Player::Second => candidate > current,
        Player::First => candidate < current,
    }
}

/// Minimax walker with a transposition cache for one root search.
#[derive(Debug, Default)]
struct Minimax {
    cache: HashMap<(Board, Player), i8>,
    nodes: u64,
}

impl Minimax {
    /// Value of `board` with `to_move` about to play.
    fn score(&mut self, board: Board, to_move: Player) -> i8 {
        self.nodes += 1;
        if let Some(score) = terminal_score(rules::evaluate(&board)) {
            return score;
        }
        if let Some(&score) = self.cache.get(&(board, to_move)) {
            return score;
        }

        let children = board.empty_cells();
        let scores = children
            .into_iter()
            .map(|pos| self.score(board.place(pos, to_move), to_move.opponent()));
        let score = match to_move {
            Player::Second => scores.max(),
            Player::First => scores.min(),
        }
        .unwrap_or(0);

        self.cache.insert((board, to_move), score);
        score
    }
}
