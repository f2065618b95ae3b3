//! Name entry before a game starts.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{AI_NAME, GameSettings};
use tracing::{debug, info, instrument, warn};

use crate::Scoreboard;
use crate::tui::screen::{GameMode, Screen, ScreenTransition};

/// State for the name entry form.
///
/// Player-vs-player asks for two names, player-vs-AI for one.
#[derive(Debug, Getters)]
pub struct EnterNamesScreen {
    mode: GameMode,
    names: Vec<String>,
    focus: usize,
    error_message: Option<String>,
}

impl EnterNamesScreen {
    /// Creates an empty form for `mode`.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        let fields = match mode {
            GameMode::PlayerVsPlayer => 2,
            GameMode::PlayerVsAi(_) => 1,
        };
        debug!(fields, "Initializing EnterNamesScreen");
        Self {
            mode,
            names: vec![String::new(); fields],
            focus: 0,
            error_message: None,
        }
    }

    /// Validates the form and builds the game settings.
    ///
    /// Names are trimmed; an empty name is rejected.
    #[instrument(skip(self))]
    pub fn settings(&self) -> Result<GameSettings, String> {
        let names: Vec<&str> = self.names.iter().map(|n| n.trim()).collect();
        if names.iter().any(|n| n.is_empty()) {
            let message = match self.mode {
                GameMode::PlayerVsPlayer => "Both player names must be entered.",
                GameMode::PlayerVsAi(_) => "Player name must be entered.",
            };
            warn!(?names, "Rejected empty player name");
            return Err(message.to_string());
        }

        let settings = match self.mode {
            GameMode::PlayerVsPlayer => GameSettings::player_vs_player(names[0], names[1]),
            GameMode::PlayerVsAi(difficulty) => GameSettings::player_vs_ai(names[0], difficulty),
        };
        Ok(settings)
    }

    fn field_title(&self, index: usize) -> String {
        match (self.mode, index) {
            (GameMode::PlayerVsAi(difficulty), _) => {
                format!("Your name (X) vs {} ({})", AI_NAME, difficulty)
            }
            (GameMode::PlayerVsPlayer, 0) => "Player 1 (X)".to_string(),
            (GameMode::PlayerVsPlayer, _) => "Player 2 (O)".to_string(),
        }
    }

    fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.names.len();
    }
}

impl Screen for EnterNamesScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _scoreboard: &Scoreboard) {
        let mut constraints = vec![Constraint::Length(3)];
        constraints.extend(self.names.iter().map(|_| Constraint::Length(3)));
        constraints.extend([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ]);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(frame.area());

        let title = Paragraph::new("Enter Player Names")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        for (i, name) in self.names.iter().enumerate() {
            let style = if i == self.focus {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let input = Paragraph::new(name.as_str())
                .style(style)
                .block(Block::default().borders(Borders::ALL).title(self.field_title(i)));
            frame.render_widget(input, chunks[i + 1]);
        }

        let error_area = chunks[self.names.len() + 1];
        let error = Paragraph::new(self.error_message.as_deref().unwrap_or(""))
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(error, error_area);

        let help = Paragraph::new("Type name | Tab: Next field | Enter: Start | Esc: Back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[self.names.len() + 3]);
    }

    #[instrument(skip(self, _scoreboard))]
    fn handle_key(&mut self, key: KeyEvent, _scoreboard: &mut Scoreboard) -> ScreenTransition {
        match key.code {
            KeyCode::Char(c) => {
                if let Some(name) = self.names.get_mut(self.focus) {
                    name.push(c);
                }
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                if let Some(name) = self.names.get_mut(self.focus) {
                    name.pop();
                }
                ScreenTransition::Stay
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Up | KeyCode::BackTab => {
                self.next_field();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                // Enter on an earlier field moves on instead of submitting.
                if self.focus + 1 < self.names.len() {
                    self.next_field();
                    return ScreenTransition::Stay;
                }
                match self.settings() {
                    Ok(settings) => {
                        info!(
                            player1 = %settings.player1_name(),
                            player2 = %settings.player2_name(),
                            "Names entered"
                        );
                        self.error_message = None;
                        ScreenTransition::StartGame(settings)
                    }
                    Err(message) => {
                        self.error_message = Some(message);
                        ScreenTransition::Stay
                    }
                }
            }
            KeyCode::Esc => ScreenTransition::GoToMainMenu,
            _ => ScreenTransition::Stay,
        }
    }
}
