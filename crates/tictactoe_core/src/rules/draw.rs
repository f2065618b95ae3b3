//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};

/// Checks if the board is full (no empty cell left).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().flatten().all(|cell| *cell != Cell::Empty)
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && super::win::check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Coord, Symbol};
    use super::*;

    fn fill(board: &mut Board, rows: [&str; 3]) {
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let symbol = match ch {
                    'X' => Symbol::X,
                    'O' => Symbol::O,
                    _ => continue,
                };
                board.place(Coord::new(row, col), symbol).unwrap();
            }
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        fill(&mut board, ["X..", ".O.", "..."]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        fill(&mut board, ["XOX", "OXX", "OXO"]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        fill(&mut board, ["XXX", "OOX", "OXO"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
