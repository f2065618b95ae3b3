//! Terminal UI: menus, name entry, the board and statistics.

mod board_view;
mod controller;
mod screen;
mod screens;

pub use controller::App;
pub use screen::{GameMode, Screen, ScreenTransition};
pub use screens::leaderboard_line;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Takes over the terminal and runs `app` until the user quits.
///
/// The terminal is restored even when the loop fails.
#[instrument(skip(app))]
pub fn run(app: &mut App) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Terminal UI closed");
    res
}
