//! App controller: the state machine driving the screens.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use tictactoe_core::{Difficulty, GameSettings};
use tracing::{debug, info, instrument};

use crate::Scoreboard;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{
    DifficultySelectScreen, EnterNamesScreen, InGameScreen, MainMenuScreen, StatsViewScreen,
};

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    MainMenu(MainMenuScreen),
    DifficultySelect(DifficultySelectScreen),
    EnterNames(EnterNamesScreen),
    InGame(InGameScreen),
    StatsView(StatsViewScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::MainMenu(s) => s,
            ActiveScreen::DifficultySelect(s) => s,
            ActiveScreen::EnterNames(s) => s,
            ActiveScreen::InGame(s) => s,
            ActiveScreen::StatsView(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::MainMenu(s) => s,
            ActiveScreen::DifficultySelect(s) => s,
            ActiveScreen::EnterNames(s) => s,
            ActiveScreen::InGame(s) => s,
            ActiveScreen::StatsView(s) => s,
        }
    }
}

/// Controller that owns the scoreboard and the current screen.
///
/// Call [`App::run`] to start the event loop.
#[derive(Debug)]
pub struct App {
    scoreboard: Scoreboard,
    default_difficulty: Difficulty,
    screen: ActiveScreen,
}

impl App {
    /// Creates the controller on the main menu.
    #[instrument(skip(scoreboard))]
    pub fn new(scoreboard: Scoreboard, default_difficulty: Difficulty) -> Self {
        info!("Creating App");
        Self {
            scoreboard,
            default_difficulty,
            screen: ActiveScreen::MainMenu(MainMenuScreen::new()),
        }
    }

    /// Skips the menus and opens a game straight away.
    pub fn with_game(mut self, settings: GameSettings) -> Self {
        self.screen = ActiveScreen::InGame(InGameScreen::new(settings));
        self
    }

    /// The scoreboard, for inspection after the loop ends.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Crossterm reports both press and release on some platforms.
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !self.handle_key(key) {
                    info!("Quitting");
                    return Ok(());
                }
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        self.screen.as_screen().render(frame, &self.scoreboard);
    }

    /// Feeds a key to the active screen; returns false once the app should exit.
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        let transition = self
            .screen
            .as_screen_mut()
            .handle_key(key, &mut self.scoreboard);
        self.apply_transition(transition)
    }

    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition) -> bool {
        if transition != ScreenTransition::Stay {
            debug!(transition = ?transition, "Applying screen transition");
        }
        self.screen = match transition {
            ScreenTransition::Stay => return true,
            ScreenTransition::GoToMainMenu => ActiveScreen::MainMenu(MainMenuScreen::new()),
            ScreenTransition::GoToDifficultySelect => ActiveScreen::DifficultySelect(
                DifficultySelectScreen::new(self.default_difficulty),
            ),
            ScreenTransition::GoToEnterNames(mode) => {
                ActiveScreen::EnterNames(EnterNamesScreen::new(mode))
            }
            ScreenTransition::StartGame(settings) => {
                info!(vs_ai = settings.vs_ai(), "Starting game");
                ActiveScreen::InGame(InGameScreen::new(settings))
            }
            ScreenTransition::GoToStats => ActiveScreen::StatsView(StatsViewScreen::new()),
            ScreenTransition::Quit => return false,
        };
        true
    }

    /// Name of the active screen, for logs and tests.
    pub fn screen_name(&self) -> &'static str {
        match self.screen {
            ActiveScreen::MainMenu(_) => "main_menu",
            ActiveScreen::DifficultySelect(_) => "difficulty_select",
            ActiveScreen::EnterNames(_) => "enter_names",
            ActiveScreen::InGame(_) => "in_game",
            ActiveScreen::StatsView(_) => "stats_view",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::screens::test_support::{key, scoreboard};
    use crossterm::event::KeyCode;

    fn press(app: &mut App, codes: impl IntoIterator<Item = KeyCode>) -> bool {
        codes.into_iter().all(|code| app.handle_key(key(code)))
    }

    fn type_str(app: &mut App, text: &str) {
        press(app, text.chars().map(KeyCode::Char));
    }

    #[test]
    fn test_full_pvp_flow_reaches_stats() {
        let (_dir, board) = scoreboard();
        let mut app = App::new(board, Difficulty::Easy);

        assert!(press(&mut app, [KeyCode::Enter]));
        assert_eq!(app.screen_name(), "enter_names");
        type_str(&mut app, "Alice");
        press(&mut app, [KeyCode::Tab]);
        type_str(&mut app, "Bob");
        press(&mut app, [KeyCode::Enter]);
        assert_eq!(app.screen_name(), "in_game");

        type_str(&mut app, "14253");
        assert_eq!(app.scoreboard().stats().game_results(), vec!["Alice wins!"]);

        press(&mut app, [KeyCode::Enter]);
        assert_eq!(app.screen_name(), "stats_view");
        press(&mut app, [KeyCode::Esc]);
        assert_eq!(app.screen_name(), "main_menu");
    }

    #[test]
    fn test_ai_path_uses_default_difficulty() {
        let (_dir, board) = scoreboard();
        let mut app = App::new(board, Difficulty::Hard);

        press(&mut app, [KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.screen_name(), "difficulty_select");
        press(&mut app, [KeyCode::Enter]);
        type_str(&mut app, "Carol");
        press(&mut app, [KeyCode::Enter]);
        assert_eq!(app.screen_name(), "in_game");
    }

    #[test]
    fn test_quick_start_and_quit() {
        let (_dir, board) = scoreboard();
        let mut app = App::new(board, Difficulty::Easy)
            .with_game(GameSettings::player_vs_player("Alice", "Bob"));
        assert_eq!(app.screen_name(), "in_game");
        assert!(!app.handle_key(key(KeyCode::Char('q'))));
    }
}
