//! Terminal front end for the tiered tic-tac-toe engine.
//!
//! Everything algorithmic lives in [`tictactoe_tiers_core`]; this crate only
//! loads configuration, resolves player names, reads moves from a terminal
//! and runs batches of AI-vs-AI games.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod names;
mod simulate;
mod terminal;

pub use config::{AppConfig, ConfigError, SideConfig};
pub use names::PlayerNames;
pub use simulate::{Report, Tally, simulate};
pub use terminal::{Input, render, run};
