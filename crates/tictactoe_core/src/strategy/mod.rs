//! AI move selection.
//!
//! Two difficulties exist: [`EasyStrategy`] picks a random empty cell and
//! [`HardStrategy`] runs a full minimax search. [`Strategy`] is the closed
//! set the game binds to an AI player.

mod easy;
mod hard;

pub use easy::EasyStrategy;
pub use hard::{HardStrategy, minimax};

use super::{Board, Coord, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Policy an AI participant uses to choose a cell.
pub trait MoveStrategy {
    /// Chooses an empty cell for `ai` to play against `human`.
    ///
    /// Returns `None` only when the board has no empty cell, which the game
    /// state machine never asks for.
    fn select_move(&mut self, board: &Board, ai: Symbol, human: Symbol) -> Option<Coord>;
}

/// AI difficulty level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Difficulty {
    /// Uniform random empty cell.
    #[default]
    Easy,
    /// Perfect play via minimax.
    Hard,
}

impl Difficulty {
    /// Parses a difficulty label, falling back to [`Difficulty::Easy`].
    ///
    /// Only the exact labels `"Easy"` and `"Hard"` are recognised.
    #[instrument]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            debug!(label, "Unknown difficulty label, using Easy");
            Difficulty::Easy
        })
    }
}

/// Strategy bound to an AI player.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Random play.
    Easy(EasyStrategy),
    /// Minimax play.
    Hard(HardStrategy),
}

impl Strategy {
    /// Builds the strategy for a difficulty.
    #[instrument]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Strategy::Easy(EasyStrategy::new()),
            Difficulty::Hard => Strategy::Hard(HardStrategy),
        }
    }

    /// Returns the difficulty this strategy plays at.
    pub fn difficulty(&self) -> Difficulty {
        match self {
            Strategy::Easy(_) => Difficulty::Easy,
            Strategy::Hard(_) => Difficulty::Hard,
        }
    }
}

impl MoveStrategy for Strategy {
    fn select_move(&mut self, board: &Board, ai: Symbol, human: Symbol) -> Option<Coord> {
        match self {
            Strategy::Easy(s) => s.select_move(board, ai, human),
            Strategy::Hard(s) => s.select_move(board, ai, human),
        }
    }
}
