//! Core Connect Four rules: the board with gravity drop and line detection,
//! player marks, and the forward-only game state machine.

mod board;
#[cfg(test)]
pub(crate) mod fixtures;
mod mark;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use mark::Mark;
pub use state::{GameState, GameStatus, MoveError};
