use super::mark::Mark;
use super::state::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of same-mark cells in a line needed to win.
const LINE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Mark),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the bottom, row 5 is the top; both indices are 0-based.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of disks in a 1-based column, 0 for columns off the board
    pub fn column_height(&self, column: usize) -> usize {
        match column_index(column) {
            Some(col) => (0..ROWS)
                .take_while(|&row| self.cells[row][col] != Cell::Empty)
                .count(),
            None => 0,
        }
    }

    /// Check if a 1-based column is full. Columns off the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        match column_index(column) {
            Some(col) => self.cells[ROWS - 1][col] != Cell::Empty,
            None => true,
        }
    }

    /// 1-based columns that can still take a disk
    pub fn legal_columns(&self) -> Vec<usize> {
        (1..=COLS)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Total number of disks on the board
    pub fn disk_count(&self) -> usize {
        (1..=COLS).map(|column| self.column_height(column)).sum()
    }

    /// Drop a disk into a 1-based column, returns the 0-based row where it landed.
    /// The board is left untouched on error.
    pub fn drop_disk(&mut self, column: usize, mark: Mark) -> Result<usize, MoveError> {
        let col = column_index(column).ok_or(MoveError::InvalidColumn(column))?;

        let row = (0..ROWS)
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(column))?;

        self.cells[row][col] = Cell::Occupied(mark);
        Ok(row)
    }

    /// Check if the board is completely full.
    /// Only the top row needs looking at since disks never float.
    pub fn is_full(&self) -> bool {
        self.cells[ROWS - 1].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Check whether `mark` owns four contiguous cells in any line
    pub fn is_four_in_a_row(&self, mark: Mark) -> bool {
        let target = Cell::Occupied(mark);

        // right, up, up-right, up-left
        const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        for row in 0..ROWS {
            for col in 0..COLS {
                if self.cells[row][col] != target {
                    continue;
                }

                for &(d_row, d_col) in &DIRECTIONS {
                    if self.line_matches(row, col, d_row, d_col, target) {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Check the three cells following (row, col) in the given direction
    fn line_matches(
        &self,
        row: usize,
        col: usize,
        d_row: isize,
        d_col: isize,
        target: Cell,
    ) -> bool {
        (1..LINE as isize).all(|step| {
            let r = row as isize + d_row * step;
            let c = col as isize + d_col * step;
            (0..ROWS as isize).contains(&r)
                && (0..COLS as isize).contains(&c)
                && self.cells[r as usize][c as usize] == target
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a 1-based column onto a 0-based index
fn column_index(column: usize) -> Option<usize> {
    (1..=COLS).contains(&column).then(|| column - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::drawn_moves;

    fn drawn_board() -> Board {
        let mut board = Board::new();
        let mut mark = Mark::X;
        for column in drawn_moves() {
            board.drop_disk(column, mark).unwrap();
            mark = mark.other();
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.disk_count(), 0);
        assert_eq!(board.legal_columns(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_drop_disk() {
        let mut board = Board::new();

        // First disk lands on the bottom row
        let row = board.drop_disk(4, Mark::X).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.get(0, 3), Cell::Occupied(Mark::X));

        // Second disk stacks on top
        let row = board.drop_disk(4, Mark::O).unwrap();
        assert_eq!(row, 1);
        assert_eq!(board.get(1, 3), Cell::Occupied(Mark::O));
        assert_eq!(board.column_height(4), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.drop_disk(1, Mark::X).unwrap();
        }

        assert!(board.is_column_full(1));
        let before = board;
        assert_eq!(board.drop_disk(1, Mark::O), Err(MoveError::ColumnFull(1)));
        assert_eq!(board, before);
        assert!(!board.legal_columns().contains(&1));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_disk(0, Mark::X), Err(MoveError::InvalidColumn(0)));
        assert_eq!(board.drop_disk(8, Mark::X), Err(MoveError::InvalidColumn(8)));
        assert_eq!(board, Board::new());
        assert!(board.is_column_full(8));
        assert_eq!(board.column_height(0), 0);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for column in 1..=COLS {
            for _ in 0..ROWS {
                assert!(!board.is_full());
                board.drop_disk(column, Mark::X).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.disk_count(), ROWS * COLS);
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_disk(1, Mark::X).unwrap();
        }
        assert!(board.is_four_in_a_row(Mark::X));
        assert!(!board.is_four_in_a_row(Mark::O));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for column in 1..=4 {
            board.drop_disk(column, Mark::X).unwrap();
        }
        assert!(board.is_four_in_a_row(Mark::X));
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let mut board = Board::new();
        for column in 4..=7 {
            board.drop_disk(column, Mark::O).unwrap();
        }
        assert!(board.is_four_in_a_row(Mark::O));
        assert!(!board.is_four_in_a_row(Mark::X));
    }

    #[test]
    fn test_diagonal_up_right_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.drop_disk(1, Mark::X).unwrap();

        board.drop_disk(2, Mark::O).unwrap();
        board.drop_disk(2, Mark::X).unwrap();

        board.drop_disk(3, Mark::O).unwrap();
        board.drop_disk(3, Mark::O).unwrap();
        board.drop_disk(3, Mark::X).unwrap();

        board.drop_disk(4, Mark::O).unwrap();
        board.drop_disk(4, Mark::O).unwrap();
        board.drop_disk(4, Mark::O).unwrap();
        assert!(!board.is_four_in_a_row(Mark::X));
        board.drop_disk(4, Mark::X).unwrap();

        assert!(board.is_four_in_a_row(Mark::X));
    }

    #[test]
    fn test_diagonal_up_left_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.drop_disk(7, Mark::X).unwrap();

        board.drop_disk(6, Mark::O).unwrap();
        board.drop_disk(6, Mark::X).unwrap();

        board.drop_disk(5, Mark::O).unwrap();
        board.drop_disk(5, Mark::O).unwrap();
        board.drop_disk(5, Mark::X).unwrap();

        board.drop_disk(4, Mark::O).unwrap();
        board.drop_disk(4, Mark::O).unwrap();
        board.drop_disk(4, Mark::O).unwrap();
        assert!(!board.is_four_in_a_row(Mark::X));
        board.drop_disk(4, Mark::X).unwrap();

        assert!(board.is_four_in_a_row(Mark::X));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for column in 1..=3 {
            board.drop_disk(column, Mark::X).unwrap();
        }
        assert!(!board.is_four_in_a_row(Mark::X));
    }

    #[test]
    fn test_line_does_not_wrap_across_rows() {
        let mut board = Board::new();
        // Bottom row, columns 5-7, then column 1 one row up
        for column in 5..=7 {
            board.drop_disk(column, Mark::X).unwrap();
        }
        board.drop_disk(1, Mark::O).unwrap();
        board.drop_disk(1, Mark::X).unwrap();
        assert!(!board.is_four_in_a_row(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let board = drawn_board();
        assert!(board.is_full());
        assert_eq!(board.disk_count(), 42);
        assert!(!board.is_four_in_a_row(Mark::X));
        assert!(!board.is_four_in_a_row(Mark::O));
    }
}
