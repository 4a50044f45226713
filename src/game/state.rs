use super::{Board, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Why a disk could not be dropped. Columns are reported 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is not between 1 and 7")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
}

impl GameState {
    /// Create initial game state
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_mark: Mark::X, // X starts
            status: GameStatus::InProgress,
        }
    }

    /// Mark of the player whose turn it is
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Get list of legal 1-based columns (none once the game is over)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Drop the current player's disk into a 1-based column.
    ///
    /// The win check only looks at the mark that just moved; a move can never
    /// complete a line for the opponent. The turn passes on only while the
    /// game is still in progress. Nothing changes on error.
    pub fn apply_move(&mut self, column: usize) -> Result<GameStatus, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_mark;
        self.board.drop_disk(column, mover)?;

        if self.board.is_four_in_a_row(mover) {
            self.status = GameStatus::Won(mover);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_mark = mover.other();
        }

        Ok(self.status)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::drawn_moves;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_columns().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::new();
        let status = state.apply_move(4).unwrap();

        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.board().get(0, 3), Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_invalid_move_keeps_turn() {
        let mut state = GameState::new();
        assert_eq!(state.apply_move(9), Err(MoveError::InvalidColumn(9)));
        assert_eq!(state, GameState::new());

        for _ in 0..6 {
            state.apply_move(1).unwrap();
        }
        let before = state;
        assert_eq!(state.apply_move(1), Err(MoveError::ColumnFull(1)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::new();

        // X builds the bottom row while O stacks on top of it
        for column in 1..=4 {
            state.apply_move(column).unwrap(); // X
            if column < 4 {
                state.apply_move(column).unwrap(); // O
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.status(), GameStatus::Won(Mark::X));
        // The winner keeps the turn marker
        assert_eq!(state.current_mark(), Mark::X);
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut state = GameState::new();
        for column in [1, 2, 1, 2, 1, 2, 1] {
            state.apply_move(column).unwrap();
        }
        assert_eq!(state.status(), GameStatus::Won(Mark::X));
        let before = state;
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::new();
        let moves = drawn_moves();
        let (last, rest) = moves.split_last().unwrap();

        for &column in rest {
            assert_eq!(state.apply_move(column).unwrap(), GameStatus::InProgress);
        }
        assert_eq!(state.apply_move(*last).unwrap(), GameStatus::Draw);
        assert!(state.board().is_full());
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidColumn(0).to_string(),
            "column 0 is not between 1 and 7"
        );
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
    }
}
