//! Tic-tac-toe game logic with no presentation or storage attached.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and placement rules
//! - **Rules**: win and draw detection
//! - **Strategy**: Easy (random) and Hard (minimax) move selection
//! - **Game**: turn-taking state machine emitting [`GameEvent`]s
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEvent, GameSettings, GameState};
//!
//! let mut game = GameState::new(GameSettings::player_vs_player("Alice", "Bob"));
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     for event in game.make_move(row, col) {
//!         if let GameEvent::GameOver(outcome) = event {
//!             assert_eq!(outcome.message(), "Alice wins!");
//!         }
//!     }
//! }
//! assert!(game.is_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod events;
mod game;
mod player;
mod recorder;
mod types;

pub mod rules;
pub mod strategy;

pub use action::{Move, MoveError};
pub use board::Board;
pub use events::{DRAW_MESSAGE, GameEvent, GameObserver, Outcome};
pub use game::{GameSettings, GameState, Opponent, Phase, Turn};
pub use player::{AI_NAME, AiPlayer, Player};
pub use recorder::{MemoryRecorder, ResultRecorder};
pub use strategy::{Difficulty, EasyStrategy, HardStrategy, MoveStrategy, Strategy};
pub use types::{Cell, Coord, Grid, SIZE, Symbol};
