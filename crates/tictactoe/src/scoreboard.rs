//! Leaderboard and history recorded together.

use crate::{AppConfig, Leaderboard, ResultLog, Stats, StoreError, WinCountStore};
use derive_getters::Getters;
use tictactoe_core::{Outcome, ResultRecorder};
use tracing::{info, instrument, warn};

/// Everything a finished game updates.
///
/// Every outcome is appended to the history; wins also count toward the
/// winner's leaderboard entry, including wins by the AI. The two files are
/// written independently, so one failing does not lose the other update.
#[derive(Debug, Clone, Getters, derive_new::new)]
pub struct Scoreboard {
    leaderboard: Leaderboard,
    stats: Stats,
}

impl Scoreboard {
    /// Opens both files named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if either file exists but cannot be read.
    #[instrument(skip(config))]
    pub fn open(config: &AppConfig) -> Result<Self, StoreError> {
        let leaderboard = Leaderboard::open(WinCountStore::new(config.leaderboard_file()))?;
        let stats = Stats::open(ResultLog::new(config.results_file()))?;
        Ok(Self::new(leaderboard, stats))
    }

    /// Clears the leaderboard and the history.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if either file cannot be written.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), StoreError> {
        info!("Resetting scoreboard");
        self.leaderboard.clear()?;
        self.stats.clear()
    }
}

impl ResultRecorder for Scoreboard {
    type Error = StoreError;

    #[instrument(skip(self), fields(result = %outcome))]
    fn record(&mut self, outcome: &Outcome) -> Result<(), StoreError> {
        let history = self.stats.add_game_result(&outcome.message());
        let leaderboard = match outcome.winner() {
            Some(winner) => self.leaderboard.record_win(winner),
            None => Ok(()),
        };
        if let Err(e) = &history {
            warn!(error = %e, "History not saved");
        }
        if let Err(e) = &leaderboard {
            warn!(error = %e, "Leaderboard not saved");
        }
        history.and(leaderboard)
    }
}
