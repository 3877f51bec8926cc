//! Turn controller: the game's state machine.
//!
//! The controller owns the configuration (who controls each side) and the
//! random source used by the AI tiers. Game states are passed in and new
//! states handed back, so a caller can keep, compare or drop them freely.

use crate::error::GameError;
use crate::invariants::check_invariants;
use crate::position::Position;
use crate::strategy::Strategy;
use crate::types::{GameState, GameStatus, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Who controls one side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Seat {
    /// Moves arrive through [`TurnController::request_move`].
    #[default]
    Human,
    /// Moves are chosen by a strategy.
    Ai(Strategy),
}

impl Seat {
    /// The strategy for an AI seat.
    pub fn strategy(self) -> Option<Strategy> {
        match self {
            Seat::Human => None,
            Seat::Ai(strategy) => Some(strategy),
        }
    }

    /// Returns true for AI seats.
    pub fn is_ai(self) -> bool {
        self.strategy().is_some()
    }
}

impl FromStr for Seat {
    type Err = GameError;

    /// Parses `"human"` or any strategy name accepted by [`Strategy::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("human") {
            Ok(Seat::Human)
        } else {
            Strategy::parse(s).map(Seat::Ai)
        }
    }
}

impl TryFrom<String> for Seat {
    type Error = GameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Seat> for String {
    fn from(seat: Seat) -> Self {
        seat.to_string()
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => write!(f, "human"),
            Seat::Ai(strategy) => write!(f, "{strategy}"),
        }
    }
}

/// Which seats are AI-controlled, and with which strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    first: Seat,
    second: Seat,
}

impl GameConfig {
    /// Creates a configuration from explicit seats.
    pub fn new(first: Seat, second: Seat) -> Self {
        Self { first, second }
    }

    /// Two humans sharing the board.
    pub fn two_player() -> Self {
        Self::new(Seat::Human, Seat::Human)
    }

    /// A human playing First against an AI playing Second.
    pub fn against(strategy: Strategy) -> Self {
        Self::new(Seat::Human, Seat::Ai(strategy))
    }

    /// The seat controlling `player`.
    pub fn seat(&self, player: Player) -> Seat {
        match player {
            Player::First => self.first,
            Player::Second => self.second,
        }
    }

    /// Seat for First.
    pub fn first(&self) -> Seat {
        self.first
    }

    /// Seat for Second.
    pub fn second(&self) -> Seat {
        self.second
    }
}

/// Drives games for one configuration.
#[derive(Debug, Clone)]
pub struct TurnController<R = StdRng> {
    config: GameConfig,
    rng: R,
}

impl TurnController<StdRng> {
    /// Creates a controller seeded from the operating system.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a controller whose random tiers replay identically for `seed`.
    #[instrument]
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TurnController<R> {
    /// Creates a controller with an explicit random source.
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The initial state: empty board, First to move.
    ///
    /// No AI move is made here even if First is AI-controlled; call
    /// [`TurnController::start`] for that.
    #[instrument(skip(self), fields(first = %self.config.first, second = %self.config.second))]
    pub fn new_game(&self) -> GameState {
        info!("New game");
        GameState::new()
    }

    /// Starts over with the same configuration.
    pub fn reset(&self) -> GameState {
        self.new_game()
    }

    /// Plays the current player's mark at a raw cell index.
    ///
    /// Out-of-range indices, occupied cells, finished games and requests on
    /// an AI-controlled turn leave the state unchanged. After a successful
    /// move, AI-controlled players reply immediately, so the returned state
    /// is either terminal or waiting on a human.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvariantViolation`] if `state` is not reachable by
    ///   legal play
    /// - [`GameError::NoLegalMove`] if an AI is asked to move with no empty
    ///   cell left
    #[instrument(skip(self, state), fields(player = ?state.current()))]
    pub fn request_move(&mut self, state: &GameState, index: usize) -> Result<GameState, GameError> {
        check_invariants(state)?;

        let ai_to_move = state.status() == GameStatus::InProgress
            && self.config.seat(state.current()).is_ai();
        let attempt = match Position::from_index(index) {
            None => Err(GameError::InvalidIndex(index)),
            Some(_) if ai_to_move => Err(GameError::WrongPlayer(state.current())),
            Some(pos) => state.play(pos),
        };

        match attempt {
            Ok(next) => self.start(next),
            Err(err) if err.is_recoverable() => {
                debug!(error = %err, "Ignoring move request");
                Ok(state.clone())
            }
            Err(err) => Err(err),
        }
    }

    /// Lets AI-controlled players move until a human is to play or the
    /// game ends.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvariantViolation`] for an inconsistent state
    /// and propagates strategy failures.
    #[instrument(skip(self, state))]
    pub fn start(&mut self, mut state: GameState) -> Result<GameState, GameError> {
        check_invariants(&state)?;
        while state.status() == GameStatus::InProgress {
            let player = state.current();
            let Some(strategy) = self.config.seat(player).strategy() else {
                break;
            };
            let pos = strategy.select_move(state.board(), player, &mut self.rng)?;
            state = state.play(pos)?;
            check_invariants(&state)?;
        }

        if state.status().is_terminal() {
            info!(status = ?state.status(), moves = state.history().len(), "Game over");
        }
        Ok(state)
    }

    /// Plays a fresh game to the end. Only meaningful when both seats are AI.
    ///
    /// # Errors
    ///
    /// Propagates strategy failures.
    pub fn play_out(&mut self) -> Result<GameState, GameError> {
        let state = self.new_game();
        self.start(state)
    }
}
