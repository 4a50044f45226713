//! Shared board positions for tests.

/// Column order that fills the board with alternating marks and never
/// lines up four: three disks per column, twice round.
const DRAW_ORDER: [usize; 7] = [1, 2, 3, 5, 4, 6, 7];

/// The 42 moves of a drawn game, `X` moving first.
pub(crate) fn drawn_moves() -> Vec<usize> {
    let round: Vec<usize> = DRAW_ORDER
        .iter()
        .flat_map(|&column| [column; 3])
        .collect();
    round.repeat(2)
}
