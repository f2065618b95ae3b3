//! AI difficulty picker.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe_core::Difficulty;
use tracing::{debug, info, instrument};

use crate::Scoreboard;
use crate::tui::screen::{GameMode, Screen, ScreenTransition};

/// State for the difficulty picker.
#[derive(Debug)]
pub struct DifficultySelectScreen {
    levels: Vec<Difficulty>,
    list_state: ListState,
}

impl DifficultySelectScreen {
    /// Creates the picker with `preselected` highlighted.
    #[instrument]
    pub fn new(preselected: Difficulty) -> Self {
        let levels: Vec<Difficulty> = Difficulty::iter().collect();
        let index = levels.iter().position(|d| *d == preselected).unwrap_or(0);
        debug!(index, "Initializing DifficultySelectScreen");
        Self {
            levels,
            list_state: ListState::default().with_selected(Some(index)),
        }
    }

    /// The highlighted difficulty.
    pub fn selected(&self) -> Difficulty {
        self.list_state
            .selected()
            .and_then(|i| self.levels.get(i).copied())
            .unwrap_or_default()
    }

    fn step(&mut self, forward: bool) {
        let count = self.levels.len();
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.list_state.select(Some(next));
    }
}

impl Screen for DifficultySelectScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _scoreboard: &Scoreboard) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("Choose AI Difficulty")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = self
            .levels
            .iter()
            .map(|level| {
                let hint = match level {
                    Difficulty::Easy => "random moves",
                    Difficulty::Hard => "never loses",
                };
                ListItem::new(format!("{:<6} {}", level.to_string(), hint))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Difficulty"))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Choose | Enter: Confirm | Esc: Back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, _scoreboard))]
    fn handle_key(&mut self, key: KeyEvent, _scoreboard: &mut Scoreboard) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.step(false);
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.step(true);
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let difficulty = self.selected();
                info!(%difficulty, "Difficulty selected");
                ScreenTransition::GoToEnterNames(GameMode::PlayerVsAi(difficulty))
            }
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
                ScreenTransition::GoToMainMenu
            }
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::screens::test_support::{key, scoreboard};

    #[test]
    fn test_preselected_difficulty() {
        let (_dir, mut board) = scoreboard();
        let mut screen = DifficultySelectScreen::new(Difficulty::Hard);
        assert_eq!(screen.selected(), Difficulty::Hard);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &mut board),
            ScreenTransition::GoToEnterNames(GameMode::PlayerVsAi(Difficulty::Hard))
        );
    }

    #[test]
    fn test_down_wraps_to_easy() {
        let (_dir, mut board) = scoreboard();
        let mut screen = DifficultySelectScreen::new(Difficulty::Hard);
        screen.handle_key(key(KeyCode::Down), &mut board);
        assert_eq!(screen.selected(), Difficulty::Easy);
    }

    #[test]
    fn test_escape_goes_back() {
        let (_dir, mut board) = scoreboard();
        let mut screen = DifficultySelectScreen::new(Difficulty::Easy);
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc), &mut board),
            ScreenTransition::GoToMainMenu
        );
    }
}
