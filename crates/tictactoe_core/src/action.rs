//! First-class move records for tic-tac-toe.
//!
//! Every placement, human or AI, is recorded as a [`Move`] in the game
//! history so a finished game can be inspected or replayed.

use super::{Coord, Symbol};
use serde::{Deserialize, Serialize};

/// A mark placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub symbol: Symbol,
    /// Where it was placed.
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.coord)
    }
}

/// Why the board refused a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column is outside the 3x3 grid.
    #[display("Coordinate {} is off the board", _0)]
    OutOfBounds(Coord),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),
}

impl std::error::Error for MoveError {}
