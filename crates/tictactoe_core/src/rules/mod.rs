//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board); the board, the strategies
//! and the state machine all evaluate positions through them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
