//! Core domain types for the game.

use crate::error::GameError;
use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first, shown as X.
    First,
    /// Moves second, shown as O.
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Board symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Unmarked cell.
    #[default]
    Empty,
    /// Marked by [`Player::First`].
    First,
    /// Marked by [`Player::Second`].
    Second,
}

impl Mark {
    /// The player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::First => Some(Player::First),
            Mark::Second => Some(Player::Second),
        }
    }

    /// Returns true if the cell is unmarked.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::First => Mark::First,
            Player::Second => Mark::Second,
        }
    }
}

/// 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit cell contents.
    pub fn from_marks(cells: [Mark; 9]) -> Self {
        Self { cells }
    }

    /// Gets the mark at a position.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Empty cells in ascending index order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Returns a copy of the board with `player`'s mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOccupied`] if the cell is already marked.
    #[instrument(skip(self))]
    pub fn apply_move(&self, pos: Position, player: Player) -> Result<Board, GameError> {
        if !self.is_empty(pos) {
            debug!(%pos, "Cell already occupied");
            return Err(GameError::CellOccupied(pos));
        }
        Ok(self.place(pos, player))
    }

    /// Unchecked placement for callers that only pick empty cells.
    pub(crate) fn place(mut self, pos: Position, player: Player) -> Board {
        self.cells[pos.index()] = Mark::from(player);
        self
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based cell number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos].player() {
                    Some(player) => player.symbol(),
                    None => char::from(b'1' + pos as u8),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Won or Draw.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if the game was won.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// Complete game state.
///
/// States are values: every transition returns a new `GameState`
/// and leaves the previous one untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move, or the player who made the final move once terminal.
    current: Player,
    /// Game status.
    status: GameStatus,
    /// Positions played, in order.
    history: Vec<Position>,
}

impl GameState {
    /// Creates the initial state: empty board, First to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::First,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current(&self) -> Player {
        self.current
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Plays `pos` for the current player and returns the next state.
    ///
    /// The current player flips only while the game stays in progress.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game already ended
    /// - [`GameError::CellOccupied`] if the cell is marked
    #[instrument(skip(self), fields(player = ?self.current))]
    pub fn play(&self, pos: Position) -> Result<Self, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        let board = self.board.apply_move(pos, self.current)?;
        let status = rules::evaluate(&board);
        let current = if status.is_terminal() {
            self.current
        } else {
            self.current.opponent()
        };

        let mut history = self.history.clone();
        history.push(pos);

        Ok(Self {
            board,
            current,
            status,
            history,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
