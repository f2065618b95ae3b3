//! Random move selection.

use super::MoveStrategy;
use crate::{Board, Coord, Symbol};
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use tracing::{debug, instrument, warn};

/// Picks uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct EasyStrategy {
    rng: StdRng,
}

impl EasyStrategy {
    /// Creates a strategy seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(rand::random::<u64>()),
        }
    }

    /// Creates a strategy with a fixed seed, for reproducible play.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EasyStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for EasyStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, ai: Symbol, human: Symbol) -> Option<Coord> {
        let empty = board.empty_cells();
        let choice = empty.choose(&mut self.rng).copied();
        match choice {
            Some(coord) => debug!(%coord, "Easy AI selected move"),
            None => warn!("Easy AI asked to move on a full board"),
        }
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_selects_empty_cells() {
        let mut board = Board::new();
        board.attempt_move(0, 0, Symbol::X);
        board.attempt_move(1, 1, Symbol::O);
        board.attempt_move(2, 2, Symbol::X);

        let mut strategy = EasyStrategy::with_seed(7);
        for _ in 0..500 {
            let coord = strategy
                .select_move(&board, Symbol::O, Symbol::X)
                .expect("board has empty cells");
            assert!(board.is_empty(coord), "selected occupied cell {coord}");
        }
    }

    #[test]
    fn test_reaches_every_empty_cell() {
        let mut board = Board::new();
        board.attempt_move(1, 1, Symbol::X);

        let mut strategy = EasyStrategy::with_seed(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(strategy.select_move(&board, Symbol::O, Symbol::X).unwrap());
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_single_empty_cell() {
        let mut board = Board::new();
        for coord in Coord::ALL.iter().filter(|c| **c != Coord::new(2, 1)) {
            let symbol = if coord.to_index() % 2 == 0 { Symbol::X } else { Symbol::O };
            board.place(*coord, symbol).unwrap();
        }
        let mut strategy = EasyStrategy::with_seed(1);
        assert_eq!(
            strategy.select_move(&board, Symbol::O, Symbol::X),
            Some(Coord::new(2, 1))
        );
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = Board::new();
        for coord in Coord::ALL {
            board.place(coord, Symbol::X).unwrap();
        }
        let mut strategy = EasyStrategy::with_seed(1);
        assert_eq!(strategy.select_move(&board, Symbol::O, Symbol::X), None);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = EasyStrategy::with_seed(99);
        let mut b = EasyStrategy::with_seed(99);
        for _ in 0..20 {
            assert_eq!(
                a.select_move(&board, Symbol::O, Symbol::X),
                b.select_move(&board, Symbol::O, Symbol::X)
            );
        }
    }
}
