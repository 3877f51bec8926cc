//! Tiered tic-tac-toe engine.
//!
//! Pure game logic for a 3x3 marking game with three AI difficulty tiers.
//!
//! # Architecture
//!
//! - **Board**: copyable grid of [`Mark`]s, transformed by [`Board::apply_move`]
//! - **Rules**: [`evaluate`] classifies a board as won, drawn or in progress
//! - **Strategies**: [`Strategy`] picks moves (random, heuristic, exhaustive search)
//! - **Controller**: [`TurnController`] runs the turn state machine and answers
//!   human moves with AI replies
//!
//! # Example
//!
//! ```
//! use tictactoe_tiers_core::{GameConfig, GameStatus, Player, Strategy, TurnController};
//!
//! let mut controller = TurnController::seeded(GameConfig::against(Strategy::Search), 7);
//! let state = controller.new_game();
//! let state = controller.request_move(&state, 4)?;
//!
//! // The search tier has already replied.
//! assert_eq!(state.history().len(), 2);
//! assert_eq!(state.current(), Player::First);
//! assert_eq!(state.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe_tiers_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
pub mod invariants;
mod position;
pub mod rules;
pub mod strategy;
mod types;

pub use controller::{GameConfig, Seat, TurnController};
pub use error::GameError;
pub use position::Position;
pub use rules::{WINNING_LINES, WinningLine, evaluate};
pub use strategy::Strategy;
pub use types::{Board, GameState, GameStatus, Mark, Player};
