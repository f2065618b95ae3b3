//! Notifications emitted by the game state machine.
//!
//! [`GameState`](crate::GameState) queues a [`GameEvent`] for every
//! observable change; callers either consume the returned events directly
//! or feed them to a [`GameObserver`] with [`GameEvent::dispatch`].

use super::{Grid, Symbol};
use serde::{Deserialize, Serialize};

/// Message reported when the board fills up without a winner.
pub const DRAW_MESSAGE: &str = "It's a draw!";

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Someone completed a line.
    Winner {
        /// Display name of the winner (`"AI"` for the computer).
        name: String,
        /// The winning mark.
        symbol: Symbol,
    },
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// The result line shown to players and kept in the history.
    pub fn message(&self) -> String {
        match self {
            Outcome::Winner { name, .. } => format!("{} wins!", name),
            Outcome::Draw => DRAW_MESSAGE.to_string(),
        }
    }

    /// Returns the winner's name, if there is one.
    pub fn winner(&self) -> Option<&str> {
        match self {
            Outcome::Winner { name, .. } => Some(name),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Something the presentation layer should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed; carries the new grid.
    BoardUpdated(Grid),
    /// Whose turn it is now, e.g. `"Alice's turn (X)"`.
    StatusChanged(String),
    /// The game ended. Emitted once per game.
    GameOver(Outcome),
}

impl GameEvent {
    /// Forwards this event to the matching observer callback.
    pub fn dispatch(&self, observer: &mut impl GameObserver) {
        match self {
            GameEvent::BoardUpdated(grid) => observer.on_board_update(grid),
            GameEvent::StatusChanged(status) => observer.on_status_update(status),
            GameEvent::GameOver(outcome) => observer.on_game_over(&outcome.message()),
        }
    }
}

/// Callback form of the notification contract.
///
/// Every method defaults to doing nothing, so an observer only implements
/// what it renders.
pub trait GameObserver {
    /// A placement succeeded.
    fn on_board_update(&mut self, _grid: &Grid) {}

    /// The turn changed (or the game started).
    fn on_status_update(&mut self, _status: &str) {}

    /// The game finished with `"<name> wins!"` or `"It's a draw!"`.
    fn on_game_over(&mut self, _message: &str) {}
}
