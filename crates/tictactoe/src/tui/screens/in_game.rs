//! The board while a game is running.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::Frame;
use tictactoe_core::{Coord, GameSettings, SIZE};
use tracing::{debug, info, instrument};

use crate::tui::board_view;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::{GameSession, Scoreboard};

const PLAYING_HELP: &str = "←↑↓→: Move | Enter/Space: Place | 1-9: Place | Esc: Menu | q: Quit";
const FINISHED_HELP: &str = "Game over | any key: Statistics | Esc: Menu | q: Quit";

/// In-game screen: a session and the keyboard cursor.
#[derive(Debug, Getters)]
pub struct InGameScreen {
    session: GameSession,
    cursor: Coord,
}

impl InGameScreen {
    /// Starts a new game from `settings`.
    #[instrument(skip(settings))]
    pub fn new(settings: GameSettings) -> Self {
        debug!(vs_ai = settings.vs_ai(), "Initializing InGameScreen");
        Self {
            session: GameSession::new(settings),
            cursor: Coord::new(1, 1),
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let clamp = |value: usize, delta: isize| {
            value.saturating_add_signed(delta).min(SIZE - 1)
        };
        self.cursor = Coord::new(clamp(self.cursor.row, d_row), clamp(self.cursor.col, d_col));
    }

    fn place(&mut self, coord: Coord, scoreboard: &mut Scoreboard) {
        self.cursor = coord;
        let events = self.session.make_move(coord.row, coord.col, scoreboard);
        debug!(%coord, events = events.len(), "Placed from keyboard");
    }
}

impl Screen for InGameScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _scoreboard: &Scoreboard) {
        let (cursor, help) = if self.session.is_over() {
            (None, FINISHED_HELP)
        } else {
            (Some(self.cursor), PLAYING_HELP)
        };
        let status = match self.session.notice() {
            Some(notice) => format!("{} ({})", self.session.status(), notice),
            None => self.session.status().clone(),
        };
        board_view::draw(frame, self.session.grid(), cursor, &status, help);
    }

    #[instrument(skip(self, scoreboard))]
    fn handle_key(&mut self, key: KeyEvent, scoreboard: &mut Scoreboard) -> ScreenTransition {
        if self.session.is_over() {
            return match key.code {
                KeyCode::Esc => ScreenTransition::GoToMainMenu,
                KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
                _ => {
                    info!("Leaving finished game for statistics");
                    ScreenTransition::GoToStats
                }
            };
        }

        match key.code {
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor, scoreboard),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(coord) = Coord::from_index(index) {
                    self.place(coord, scoreboard);
                }
            }
            KeyCode::Esc => {
                info!("Game abandoned");
                return ScreenTransition::GoToMainMenu;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return ScreenTransition::Quit,
            _ => {}
        }
        ScreenTransition::Stay
    }
}
