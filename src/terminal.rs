//! Line-based terminal front end.
//!
//! Reads one command per line, forwards cell indices to the engine
//! unvalidated and prints whatever state comes back.

use crate::names::PlayerNames;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_tiers_core::{GameState, Position, TurnController};
use tracing::{debug, info, instrument};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play at a raw board index (0-based, possibly out of range).
    Move(usize),
    /// Start a new game.
    Reset,
    /// Leave the session.
    Quit,
    /// Anything else.
    Unknown,
}

impl Input {
    /// Parses a cell number (1-9), a cell label, `reset` or `quit`.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Input::Quit,
            "r" | "reset" | "new" => return Input::Reset,
            _ => {}
        }
        if let Ok(number) = line.parse::<usize>() {
            return number.checked_sub(1).map_or(Input::Unknown, Input::Move);
        }
        Position::from_label(line).map_or(Input::Unknown, |pos| Input::Move(pos.index()))
    }
}

/// Runs an interactive session until `quit` or end of input.
///
/// Returns the last game state.
#[instrument(skip_all)]
pub fn run<I: BufRead, W: Write>(
    controller: &mut TurnController,
    names: &PlayerNames,
    input: I,
    mut output: W,
) -> Result<GameState> {
    let mut state = controller.start(controller.new_game())?;
    render(&mut output, &state, names)?;

    for line in input.lines() {
        let line = line?;
        match Input::parse(&line) {
            Input::Quit => break,
            Input::Reset => {
                info!("Resetting game");
                state = controller.start(controller.reset())?;
                writeln!(output, "New game.")?;
            }
            Input::Move(index) => {
                let next = controller.request_move(&state, index)?;
                if next == state {
                    debug!(index, "Move rejected");
                    writeln!(output, "That move isn't allowed.")?;
                }
                state = next;
            }
            Input::Unknown => {
                writeln!(output, "Enter a cell number 1-9, a cell name, 'reset' or 'quit'.")?;
            }
        }
        render(&mut output, &state, names)?;
    }

    Ok(state)
}

/// Writes the board and a status line.
pub fn render<W: Write>(output: &mut W, state: &GameState, names: &PlayerNames) -> Result<()> {
    writeln!(output, "{}", state.board().display())?;
    match names.outcome_message(state.status()) {
        Some(message) => writeln!(output, "{message}")?,
        None => {
            let player = state.current();
            writeln!(output, "{}'s turn ({})", names.name(player), player.symbol())?;
        }
    }
    output.flush()?;
    Ok(())
}
