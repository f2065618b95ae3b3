//! Main menu: pick a mode, open the statistics or quit.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::Scoreboard;
use crate::tui::screen::{GameMode, Screen, ScreenTransition};

/// Menu entries, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
enum MenuOption {
    #[strum(to_string = "Player vs Player")]
    PlayerVsPlayer,
    #[strum(to_string = "Player vs AI")]
    PlayerVsAi,
    #[strum(to_string = "Statistics")]
    Statistics,
    #[strum(to_string = "Quit")]
    Quit,
}

/// State for the main menu.
#[derive(Debug)]
pub struct MainMenuScreen {
    options: Vec<MenuOption>,
    list_state: ListState,
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenuScreen {
    /// Creates the menu with the first entry selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing MainMenuScreen");
        Self {
            options: MenuOption::iter().collect(),
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    fn select_previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.options.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> MenuOption {
        let idx = self.list_state.selected().unwrap_or(0);
        self.options[idx.min(self.options.len() - 1)]
    }
}

impl Screen for MainMenuScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, scoreboard: &Scoreboard) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("Tic-Tac-Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let summary = format!("Games played: {}", scoreboard.stats().len());
        let summary = Paragraph::new(summary)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(summary, chunks[1]);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|opt| ListItem::new(opt.to_string()))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[2], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, _scoreboard))]
    fn handle_key(&mut self, key: KeyEvent, _scoreboard: &mut Scoreboard) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = %option, "Menu option selected");
                match option {
                    MenuOption::PlayerVsPlayer => {
                        ScreenTransition::GoToEnterNames(GameMode::PlayerVsPlayer)
                    }
                    MenuOption::PlayerVsAi => ScreenTransition::GoToDifficultySelect,
                    MenuOption::Statistics => ScreenTransition::GoToStats,
                    MenuOption::Quit => ScreenTransition::Quit,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
