//! Result history and leaderboard.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::Scoreboard;
use crate::tui::screen::{Screen, ScreenTransition};

/// Statistics screen. Reads the scoreboard on every render so it always
/// shows the latest results.
#[derive(Debug, Default)]
pub struct StatsViewScreen;

impl StatsViewScreen {
    /// Creates the screen.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing StatsViewScreen");
        Self
    }
}

/// Leaderboard line for one player.
pub fn leaderboard_line(name: &str, wins: u32) -> String {
    format!("{}: {} wins", name, wins)
}

impl Screen for StatsViewScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, scoreboard: &Scoreboard) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("Statistics")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let results: Vec<ListItem> = scoreboard
            .stats()
            .game_results()
            .into_iter()
            .map(ListItem::new)
            .collect();
        let results = List::new(results).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Game Results"),
        );
        frame.render_widget(results, columns[0]);

        let leaders: Vec<ListItem> = scoreboard
            .leaderboard()
            .win_counts()
            .iter()
            .map(|(name, wins)| ListItem::new(leaderboard_line(name, *wins)))
            .collect();
        let leaders = List::new(leaders)
            .style(Style::default().fg(Color::Green))
            .block(Block::default().borders(Borders::ALL).title("Leaderboard"));
        frame.render_widget(leaders, columns[1]);

        let help = Paragraph::new("Esc / b / Enter: Back to Menu | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, _scoreboard))]
    fn handle_key(&mut self, key: KeyEvent, _scoreboard: &mut Scoreboard) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('B') => {
                info!("Returning to main menu from stats");
                ScreenTransition::GoToMainMenu
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
