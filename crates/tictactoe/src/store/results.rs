//! Line-per-result history file.

use super::StoreError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Reads and writes finished-game result lines such as `"Alice wins!"`.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct ResultLog {
    #[new(into)]
    path: PathBuf,
}

impl ResultLog {
    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every non-blank line, oldest first. A missing file is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read. Invalid
    /// UTF-8 is replaced rather than treated as an error.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Vec<String>, StoreError> {
        if !self.path.exists() {
            info!("Result file does not exist yet");
            return Ok(Vec::new());
        }

        let content = super::read_lossy(&self.path)?;
        let results: Vec<String> = content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        info!(results = results.len(), "Results loaded");
        Ok(results)
    }

    /// Replaces the file with `results`, one per line.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    #[instrument(skip(self, results), fields(path = %self.path.display(), results = results.len()))]
    pub fn save(&self, results: &[String]) -> Result<(), StoreError> {
        let content: String = results.iter().map(|line| format!("{}\n", line)).collect();
        std::fs::write(&self.path, content)?;
        debug!("Results saved");
        Ok(())
    }
}
