//! Per-player win counts.

use crate::{StoreError, WinCountStore};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Win counts loaded from a [`WinCountStore`] and saved after every change.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    store: WinCountStore,
    wins: BTreeMap<String, u32>,
}

impl Leaderboard {
    /// Opens the leaderboard, loading existing counts.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing file cannot be read.
    #[instrument(skip(store), fields(path = %store.path().display()))]
    pub fn open(store: WinCountStore) -> Result<Self, StoreError> {
        let wins = store.load()?;
        info!(players = wins.len(), "Leaderboard opened");
        Ok(Self { store, wins })
    }

    /// Adds one win for `name` and saves.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the counts cannot be saved. The in-memory
    /// count is still incremented.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, name: &str) -> Result<(), StoreError> {
        let count = self.wins.entry(name.to_string()).or_insert(0);
        *count += 1;
        info!(player = %name, wins = *count, "Recorded win");
        self.store.save(&self.wins)
    }

    /// Wins per player, most wins first, ties by name.
    #[instrument(skip(self))]
    pub fn win_counts(&self) -> Vec<(String, u32)> {
        let mut counts: Vec<(String, u32)> = self
            .wins
            .iter()
            .map(|(name, wins)| (name.clone(), *wins))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        debug!(players = counts.len(), "Fetched win counts");
        counts
    }

    /// Wins recorded for `name`.
    pub fn wins_for(&self, name: &str) -> u32 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    /// Forgets every count and saves the empty leaderboard.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), StoreError> {
        info!("Clearing leaderboard");
        self.wins.clear();
        self.store.save(&self.wins)
    }
}
