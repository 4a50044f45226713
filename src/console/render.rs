use crossterm::style::Stylize;

use crate::config::DisplayConfig;
use crate::game::{Board, Cell, Mark, COLS, ROWS};

/// Glyphs used to draw each kind of cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStyle {
    pub empty: char,
    pub x: char,
    pub o: char,
}

impl BoardStyle {
    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Occupied(Mark::X) => self.x,
            Cell::Occupied(Mark::O) => self.o,
        }
    }
}

impl Default for BoardStyle {
    fn default() -> Self {
        BoardStyle {
            empty: '*',
            x: Mark::X.symbol(),
            o: Mark::O.symbol(),
        }
    }
}

impl From<&DisplayConfig> for BoardStyle {
    fn from(display: &DisplayConfig) -> Self {
        BoardStyle {
            empty: display.empty_glyph,
            x: display.x_glyph,
            o: display.o_glyph,
        }
    }
}

/// Render the board top row first, with 1-based column headers.
/// With `color` set, X disks are painted red and O disks yellow.
pub fn render_board(board: &Board, style: &BoardStyle, color: bool) -> String {
    let mut lines = vec!["CONNECT 4 GAME".to_string(), String::new()];

    let header: String = (1..=COLS).map(|column| format!("  {column}")).collect();
    lines.push(header);

    for row in (0..ROWS).rev() {
        let mut line = String::from("|");
        for col in 0..COLS {
            let cell = board.get(row, col);
            let text = format!(" {} ", style.glyph(cell));
            match (color, cell) {
                (true, Cell::Occupied(Mark::X)) => line.push_str(&text.red().to_string()),
                (true, Cell::Occupied(Mark::O)) => line.push_str(&text.yellow().to_string()),
                _ => line.push_str(&text),
            }
        }
        line.push('|');
        lines.push(line);
    }

    lines.push("-".repeat(COLS * 3 + 2));
    lines.join("\n")
}
