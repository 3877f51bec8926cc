//! Consistency checks for game states.
//!
//! Each check is a zero-sized type implementing [`Invariant`]; tuples of
//! checks form an [`InvariantSet`]. The turn controller runs
//! [`GameInvariants`] on every state it accepts or produces, so a state
//! rebuilt from untrusted input is rejected instead of played on.

use crate::error::GameError;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameState, Player};
use tracing::warn;

/// A property of `S` that legal play preserves.
pub trait Invariant<S> {
    /// Whether `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Short sentence naming the property, used in error messages.
    fn description() -> &'static str;
}

/// A failed check, carrying the description of the broken property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// What was expected to hold.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a property description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants run as one check.
pub trait InvariantSet<S> {
    /// Runs every member, returning all failures rather than the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
            (C::holds(state), C::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Player who made the move at `ply` (0-based). First always opens.
fn mover(ply: usize) -> Player {
    if ply % 2 == 0 {
        Player::First
    } else {
        Player::Second
    }
}

/// Invariant: cells are never overwritten.
///
/// Replaying the history onto an empty board must hit an empty cell every
/// time and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let replayed = state
            .history()
            .iter()
            .enumerate()
            .try_fold(Board::new(), |board, (ply, &pos)| {
                board.apply_move(pos, mover(ply)).ok()
            });
        replayed.as_ref() == Some(state.board())
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

/// Invariant: players alternate, First opening.
///
/// While in progress the side to move follows from the history length;
/// once terminal the current player is the one who made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let plies = state.history().len();
        let expected = if state.status().is_terminal() {
            match plies.checked_sub(1) {
                Some(last) => mover(last),
                None => return false,
            }
        } else {
            mover(plies)
        };
        state.current() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (First, Second, First, ...)"
    }
}

/// Invariant: history, board and status agree.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let filled = state
            .board()
            .cells()
            .iter()
            .filter(|mark| !mark.is_empty())
            .count();
        let mut played: Vec<Position> = state.history().to_vec();
        played.sort();
        played.dedup();

        filled == state.history().len()
            && played.len() == state.history().len()
            && rules::evaluate(state.board()) == state.status()
    }

    fn description() -> &'static str {
        "History matches the board and the status matches the rules"
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

/// Runs [`GameInvariants`] on `state`.
///
/// # Errors
///
/// Returns [`GameError::InvariantViolation`] listing every broken property.
pub fn check_invariants(state: &GameState) -> Result<(), GameError> {
    GameInvariants::check_all(state).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Invariant violated");
        GameError::InvariantViolation(descriptions)
    })
}
