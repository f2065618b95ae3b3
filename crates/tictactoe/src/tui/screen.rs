//! Screen trait and transition type for the menu state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use tictactoe_core::{Difficulty, GameSettings};

use crate::Scoreboard;

/// Who player two is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans sharing the keyboard.
    PlayerVsPlayer,
    /// One human against the AI.
    PlayerVsAi(Difficulty),
}

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`App`](super::App) state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Back to the main menu.
    GoToMainMenu,
    /// Pick the AI difficulty.
    GoToDifficultySelect,
    /// Collect player names for the chosen mode.
    GoToEnterNames(GameMode),
    /// Start a game.
    StartGame(GameSettings),
    /// Result history and leaderboard.
    GoToStats,
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen in the menu state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, scoreboard: &Scoreboard);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, scoreboard: &mut Scoreboard) -> ScreenTransition;
}
