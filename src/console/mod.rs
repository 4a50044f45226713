//! Console collaborator: the message-display / input-read contract used by
//! the turn controller, board rendering, and a crossterm-backed terminal
//! implementation.

mod render;
mod terminal;

pub use render::{render_board, BoardStyle};
pub use terminal::TerminalConsole;

#[cfg(test)]
pub(crate) use terminal::MemoryConsole;

use crate::error::GameError;
use crate::game::Board;

/// Everything the game needs from the outside world.
pub trait Console {
    /// Print one line of text.
    fn show_message(&mut self, msg: &str) -> Result<(), GameError>;

    /// Read one line of input without its line ending.
    /// Fails with [`GameError::InputClosed`] once input is exhausted.
    fn read_line(&mut self) -> Result<String, GameError>;

    fn clear(&mut self) -> Result<(), GameError>;

    fn show_board(&mut self, board: &Board) -> Result<(), GameError>;

    /// Read an integer column choice, re-prompting until the input is numeric.
    /// Range checking is left to the caller.
    fn read_column(&mut self) -> Result<i64, GameError> {
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<i64>() {
                Ok(column) => return Ok(column),
                Err(_) => self.show_message("Enter a number")?,
            }
        }
    }

    /// Ask for the number of human players until the answer is 1 or 2.
    fn read_player_count(&mut self) -> Result<u8, GameError> {
        loop {
            self.show_message("How many players? (1 or 2)")?;
            match self.read_line()?.trim() {
                "1" => return Ok(1),
                "2" => return Ok(2),
                _ => self.show_message("Invalid input!")?,
            }
        }
    }

    /// Ask for a player name; blank input falls back to `default`.
    fn read_name(&mut self, prompt: &str, default: &str) -> Result<String, GameError> {
        self.show_message(prompt)?;
        let name = self.read_line()?;
        let name = name.trim();
        if name.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(name.to_string())
        }
    }

    /// Ask whether to play another game, re-prompting on anything but y/n.
    fn ask_restart(&mut self) -> Result<bool, GameError> {
        loop {
            self.show_message("Would you like to play again? (Y/N)")?;
            match self.read_line()?.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.show_message("Invalid input!")?,
            }
        }
    }
}
