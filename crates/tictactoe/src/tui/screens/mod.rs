//! Screen implementations.

mod difficulty_select;
mod enter_names;
mod in_game;
mod main_menu;
mod stats_view;

pub use difficulty_select::DifficultySelectScreen;
pub use enter_names::EnterNamesScreen;
pub use in_game::InGameScreen;
pub use main_menu::MainMenuScreen;
pub use stats_view::{StatsViewScreen, leaderboard_line};
