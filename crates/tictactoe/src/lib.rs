//! Terminal tic-tac-toe: configuration, persistence and the terminal UI.
//!
//! Game rules and the AI live in [`tictactoe_core`]; this crate adds the
//! pieces around a game:
//!
//! - **Config**: file locations and defaults from TOML
//! - **Store**: flat files for win counts and result history
//! - **Scoreboard**: leaderboard and history updated after each game
//! - **Session**: a game wired to the scoreboard
//! - **TUI**: menus, name entry, the board and statistics

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod leaderboard;
mod scoreboard;
mod session;
mod stats;
mod store;

pub mod tui;

pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use leaderboard::Leaderboard;
pub use scoreboard::Scoreboard;
pub use session::GameSession;
pub use stats::Stats;
pub use store::{ResultLog, StoreError, WinCountStore};
