//! Win detection logic for tic-tac-toe.

use super::super::{Board, Coord, Symbol};

/// The eight lines that complete a game, rows before columns before diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord { row: 0, col: 0 }, Coord { row: 0, col: 1 }, Coord { row: 0, col: 2 }],
    [Coord { row: 1, col: 0 }, Coord { row: 1, col: 1 }, Coord { row: 1, col: 2 }],
    [Coord { row: 2, col: 0 }, Coord { row: 2, col: 1 }, Coord { row: 2, col: 2 }],
    // Columns
    [Coord { row: 0, col: 0 }, Coord { row: 1, col: 0 }, Coord { row: 2, col: 0 }],
    [Coord { row: 0, col: 1 }, Coord { row: 1, col: 1 }, Coord { row: 2, col: 1 }],
    [Coord { row: 0, col: 2 }, Coord { row: 1, col: 2 }, Coord { row: 2, col: 2 }],
    // Diagonals
    [Coord { row: 0, col: 0 }, Coord { row: 1, col: 1 }, Coord { row: 2, col: 2 }],
    [Coord { row: 0, col: 2 }, Coord { row: 1, col: 1 }, Coord { row: 2, col: 0 }],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark filling any complete line, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Symbol> {
    LINES.iter().find_map(|&[a, b, c]| {
        let symbol = board.cell(a)?.symbol()?;
        (board.cell(b)? == board.cell(a)? && board.cell(c)? == board.cell(a)?).then_some(symbol)
    })
}
