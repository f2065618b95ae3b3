//! Board and rule properties checked over every line and cell.

use tictactoe_core::rules::{LINES, is_draw, is_full};
use tictactoe_core::{Board, Cell, Coord, Symbol};

#[test]
fn test_every_line_wins_for_either_symbol() {
    for symbol in [Symbol::X, Symbol::O] {
        for line in LINES {
            let mut board = Board::new();
            for coord in line {
                assert!(board.attempt_move(coord.row, coord.col, symbol));
            }
            assert_eq!(board.check_winner(), Some(symbol), "line {:?}", line);
            assert!(!is_draw(&board));
        }
    }
}

#[test]
fn test_cells_never_overwritten() {
    let mut board = Board::new();
    for (i, coord) in Coord::ALL.into_iter().enumerate() {
        let symbol = if i % 2 == 0 { Symbol::X } else { Symbol::O };
        assert!(board.attempt_move(coord.row, coord.col, symbol));
        assert!(!board.attempt_move(coord.row, coord.col, symbol.opponent()));
        assert_eq!(board.cell(coord), Some(Cell::Marked(symbol)));
    }
    assert!(is_full(&board));
    assert!(board.empty_cells().is_empty());
}

#[test]
fn test_out_of_range_rejected() {
    let mut board = Board::new();
    assert!(!board.attempt_move(3, 0, Symbol::X));
    assert!(!board.attempt_move(0, 3, Symbol::X));
    assert!(!board.attempt_move(usize::MAX, usize::MAX, Symbol::O));
    assert_eq!(board, Board::new());
}

#[test]
fn test_snapshot_is_a_copy() {
    let mut board = Board::new();
    board.attempt_move(1, 1, Symbol::X);
    let snapshot = board.snapshot();
    board.attempt_move(0, 0, Symbol::O);

    assert_eq!(snapshot[0][0], Cell::Empty);
    assert_eq!(snapshot[1][1], Cell::Marked(Symbol::X));
}

#[test]
fn test_display_numbers_empty_cells() {
    let mut board = Board::new();
    board.attempt_move(0, 0, Symbol::X);
    board.attempt_move(1, 1, Symbol::O);
    assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
}

#[test]
fn test_board_serializes() {
    let mut board = Board::new();
    board.attempt_move(2, 0, Symbol::O);
    let json = serde_json::to_string(&board).expect("serialize board");
    let back: Board = serde_json::from_str(&json).expect("deserialize board");
    assert_eq!(back, board);
}
