//! Error types for the game engine.

use crate::position::Position;
use crate::types::Player;

/// Error that can occur when applying or selecting a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The target cell is already marked.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// A raw cell index outside 0-8.
    #[display("Cell index {} is outside the board (0-8)", _0)]
    InvalidIndex(usize),

    /// The game already ended.
    #[display("Game is already over")]
    GameOver,

    /// A move was requested for a side controlled by an AI.
    #[display("It's not a human's turn: {:?} is AI-controlled", _0)]
    WrongPlayer(Player),

    /// A strategy was asked to move on a full board.
    #[display("No legal move: every cell is occupied")]
    NoLegalMove,

    /// Configuration named a strategy that does not exist.
    #[display("Unknown strategy {:?} (expected random, heuristic or search)", _0)]
    UnknownStrategy(String),

    /// A state failed its consistency checks.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl GameError {
    /// Errors caused by bad user input rather than a broken configuration.
    ///
    /// Move requests that fail with one of these leave the state unchanged.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::CellOccupied(_)
                | GameError::InvalidIndex(_)
                | GameError::GameOver
                | GameError::WrongPlayer(_)
        )
    }
}

impl std::error::Error for GameError {}
