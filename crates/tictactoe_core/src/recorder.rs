//! Capability for persisting finished games.

use super::Outcome;

/// Something that keeps track of finished games.
///
/// Implemented outside this crate (leaderboard, result history); handed to
/// whoever drives a game so the core never reaches for global state.
pub trait ResultRecorder {
    /// Error raised when the result cannot be stored.
    type Error: std::error::Error;

    /// Records one finished game.
    fn record(&mut self, outcome: &Outcome) -> Result<(), Self::Error>;
}

/// Keeps results in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRecorder {
    outcomes: Vec<Outcome>,
}

impl MemoryRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded outcome, oldest first.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
}

impl ResultRecorder for MemoryRecorder {
    type Error = std::convert::Infallible;

    fn record(&mut self, outcome: &Outcome) -> Result<(), Self::Error> {
        self.outcomes.push(outcome.clone());
        Ok(())
    }
}
