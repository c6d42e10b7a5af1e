//! Core Tic-Tac-Toe logic: board representation, symbols, and the turn state
//! machine that drives a match between two players.

mod board;
mod state;
mod symbol;

pub use board::{Board, Cell, STANDARD_SIZE};
pub use state::{Game, GameOutcome, TurnResult};
pub use symbol::Symbol;
