use std::io::{self, BufRead, Stdout, StdinLock, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use super::render::{render_board, BoardStyle};
use super::Console;
use crate::config::DisplayConfig;
use crate::error::GameError;
use crate::game::Board;

/// Line-oriented console over any reader/writer pair, stdin/stdout in the
/// binary and in-memory buffers in tests.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    style: BoardStyle,
    color: bool,
    clear_screen: bool,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    pub fn stdio(display: &DisplayConfig) -> Self {
        TerminalConsole::new(io::stdin().lock(), io::stdout(), display)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W, display: &DisplayConfig) -> Self {
        TerminalConsole {
            input,
            output,
            style: BoardStyle::from(display),
            color: display.color,
            clear_screen: display.clear_screen,
        }
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn show_message(&mut self, msg: &str) -> Result<(), GameError> {
        writeln!(self.output, "{msg}")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, GameError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(GameError::InputClosed);
        }
        // Undecodable bytes become replacement characters and fail parsing
        // like any other bad input instead of ending the game
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn clear(&mut self) -> Result<(), GameError> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn show_board(&mut self, board: &Board) -> Result<(), GameError> {
        let rendered = render_board(board, &self.style, self.color);
        writeln!(self.output, "{rendered}")?;
        self.output.flush()?;
        Ok(())
    }
}

/// In-memory console for tests: scripted input, captured plain output.
#[cfg(test)]
pub(crate) type MemoryConsole = TerminalConsole<io::Cursor<Vec<u8>>, Vec<u8>>;

#[cfg(test)]
impl MemoryConsole {
    pub(crate) fn scripted(input: &str) -> Self {
        Self::scripted_bytes(input.as_bytes())
    }

    pub(crate) fn scripted_bytes(input: &[u8]) -> Self {
        let display = DisplayConfig {
            color: false,
            clear_screen: false,
            ..DisplayConfig::default()
        };
        TerminalConsole::new(io::Cursor::new(input.to_vec()), Vec::new(), &display)
    }

    pub(crate) fn written(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}
