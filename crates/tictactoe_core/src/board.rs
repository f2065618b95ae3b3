//! The 3x3 board.

use super::action::MoveError;
use super::types::{Cell, Coord, Grid, SIZE, Symbol};
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// Cells only ever go from empty to marked: a placement into an occupied
/// or off-board cell is refused and leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Places `symbol` at (`row`, `col`) if the cell exists and is empty.
    ///
    /// Returns `false` (and changes nothing) for off-board coordinates or an
    /// occupied cell.
    #[instrument(level = "trace", skip(self))]
    pub fn attempt_move(&mut self, row: usize, col: usize, symbol: Symbol) -> bool {
        self.place(Coord::new(row, col), symbol).is_ok()
    }

    /// Places `symbol` at `coord`, reporting why a placement was refused.
    pub fn place(&mut self, coord: Coord, symbol: Symbol) -> Result<(), MoveError> {
        if !coord.in_bounds() {
            trace!(%coord, "Placement off the board");
            return Err(MoveError::OutOfBounds(coord));
        }
        let cell = &mut self.cells[coord.row][coord.col];
        if !cell.is_empty() {
            trace!(%coord, "Placement on occupied cell");
            return Err(MoveError::CellOccupied(coord));
        }
        *cell = Cell::Marked(symbol);
        Ok(())
    }

    /// Clears a cell. Only the search uses this, on its own scratch board.
    pub(crate) fn clear(&mut self, coord: Coord) {
        if coord.in_bounds() {
            self.cells[coord.row][coord.col] = Cell::Empty;
        }
    }

    /// Returns the cell at `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    /// Returns true if `coord` is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.cell(coord), Some(Cell::Empty))
    }

    /// Borrows the cells.
    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    /// Returns a copy of the cells for rendering.
    pub fn snapshot(&self) -> Grid {
        self.cells
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|coord| self.is_empty(*coord))
            .collect()
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the mark filling a complete line, if any.
    pub fn check_winner(&self) -> Option<Symbol> {
        rules::check_winner(self)
    }

    /// Number of marked cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    /// Renders rows as `X|O|3` with empty cells numbered 1-9.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let coord = Coord::new(row, col);
                match self.cells[row][col] {
                    Cell::Empty => write!(f, "{}", coord.to_index() + 1)?,
                    Cell::Marked(symbol) => write!(f, "{}", symbol)?,
                }
                if col < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.check_winner(), None);
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_attempt_move_marks_cell() {
        let mut board = Board::new();
        assert!(board.attempt_move(1, 2, Symbol::X));
        assert_eq!(board.cell(Coord::new(1, 2)), Some(Cell::Marked(Symbol::X)));
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_occupied_cell_rejected_without_overwrite() {
        let mut board = Board::new();
        assert!(board.attempt_move(0, 0, Symbol::X));
        let before = board.clone();
        assert!(!board.attempt_move(0, 0, Symbol::O));
        assert!(!board.attempt_move(0, 0, Symbol::X));
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut board = Board::new();
        assert!(!board.attempt_move(3, 0, Symbol::X));
        assert!(!board.attempt_move(0, 3, Symbol::X));
        assert!(!board.attempt_move(usize::MAX, 1, Symbol::O));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_reports_reason() {
        let mut board = Board::new();
        assert_eq!(
            board.place(Coord::new(4, 4), Symbol::X),
            Err(MoveError::OutOfBounds(Coord::new(4, 4)))
        );
        board.place(Coord::new(1, 1), Symbol::X).unwrap();
        assert_eq!(
            board.place(Coord::new(1, 1), Symbol::O),
            Err(MoveError::CellOccupied(Coord::new(1, 1)))
        );
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Symbol::X).unwrap();
        board.place(Coord::new(1, 1), Symbol::O).unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
