//! One game wired to whatever records its result.

use derive_getters::Getters;
use tictactoe_core::{GameEvent, GameSettings, GameState, Grid, Outcome, ResultRecorder};
use tracing::{debug, error, info, instrument};

/// A running game plus the latest view of it for rendering.
///
/// The outcome goes to the recorder exactly once, when the game-over event
/// comes out of [`make_move`](Self::make_move).
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// The game itself.
    game: GameState,
    /// Grid as of the last board update.
    grid: Grid,
    /// Whose turn it is, or the result.
    status: String,
    /// Set once the game has finished.
    outcome: Option<Outcome>,
    /// Problem saving the result, for display.
    notice: Option<String>,
}

impl GameSession {
    /// Starts a game from `settings`.
    #[instrument(skip(settings))]
    pub fn new(settings: GameSettings) -> Self {
        Self::from_game(GameState::new(settings))
    }

    /// Wraps an already created game.
    pub fn from_game(mut game: GameState) -> Self {
        let opening = game.drain_events();
        let mut session = Self {
            grid: game.board().snapshot(),
            status: game.status(),
            outcome: None,
            notice: None,
            game,
        };
        for event in &opening {
            if let GameEvent::StatusChanged(status) = event {
                session.status = status.clone();
            }
        }
        session
    }

    /// Plays (`row`, `col`) for the current player.
    ///
    /// Returns the events the move produced. A finished game is handed to
    /// `recorder`; if that fails the error is logged and kept in
    /// [`notice`](Self::notice) and the session carries on.
    #[instrument(skip(self, recorder))]
    pub fn make_move<R: ResultRecorder>(
        &mut self,
        row: usize,
        col: usize,
        recorder: &mut R,
    ) -> Vec<GameEvent> {
        let events = self.game.make_move(row, col);
        debug!(events = events.len(), "Move produced events");

        for event in &events {
            match event {
                GameEvent::BoardUpdated(grid) => self.grid = *grid,
                GameEvent::StatusChanged(status) => self.status = status.clone(),
                GameEvent::GameOver(outcome) => {
                    self.status = outcome.message();
                    self.outcome = Some(outcome.clone());
                    self.record(outcome, recorder);
                }
            }
        }
        events
    }

    fn record<R: ResultRecorder>(&mut self, outcome: &Outcome, recorder: &mut R) {
        match recorder.record(outcome) {
            Ok(()) => info!(result = %outcome, "Game result recorded"),
            Err(e) => {
                error!(error = %e, "Failed to record game result");
                self.notice = Some(format!("Result not saved: {}", e));
            }
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
