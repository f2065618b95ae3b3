//! History of finished games.

use crate::{ResultLog, StoreError};
use tracing::{info, instrument};

/// Result lines in the order the games finished.
#[derive(Debug, Clone)]
pub struct Stats {
    log: ResultLog,
    results: Vec<String>,
}

impl Stats {
    /// Opens the history, loading existing results.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing file cannot be read.
    #[instrument(skip(log), fields(path = %log.path().display()))]
    pub fn open(log: ResultLog) -> Result<Self, StoreError> {
        let results = log.load()?;
        info!(results = results.len(), "Stats opened");
        Ok(Self { log, results })
    }

    /// Appends a result and saves.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the history cannot be saved.
    #[instrument(skip(self))]
    pub fn add_game_result(&mut self, result: &str) -> Result<(), StoreError> {
        self.results.push(result.to_string());
        info!(total = self.results.len(), "Added game result");
        self.log.save(&self.results)
    }

    /// Copy of every result, oldest first.
    pub fn game_results(&self) -> Vec<String> {
        self.results.clone()
    }

    /// Number of recorded games.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if no game has been recorded.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Forgets every result and saves the empty history.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), StoreError> {
        info!("Clearing game history");
        self.results.clear();
        self.log.save(&self.results)
    }
}
