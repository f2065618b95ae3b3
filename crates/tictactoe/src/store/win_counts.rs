//! `name:count` file backing the leaderboard.

use super::StoreError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Reads and writes per-player win counts, one `name:count` line each.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct WinCountStore {
    #[new(into)]
    path: PathBuf,
}

impl WinCountStore {
    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every count in the file.
    ///
    /// A missing file is an empty leaderboard. Lines are split at the last
    /// `:` so names may contain colons; lines that do not parse are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read. Invalid
    /// UTF-8 is replaced rather than treated as an error.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<BTreeMap<String, u32>, StoreError> {
        if !self.path.exists() {
            info!("Win count file does not exist yet");
            return Ok(BTreeMap::new());
        }

        let content = super::read_lossy(&self.path)?;

        let mut counts = BTreeMap::new();
        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Some((name, count)) => {
                    counts.insert(name.to_string(), count);
                }
                None => warn!(line_number = number + 1, line, "Skipping malformed win count line"),
            }
        }

        info!(players = counts.len(), "Win counts loaded");
        Ok(counts)
    }

    /// Replaces the file with `counts`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    #[instrument(skip(self, counts), fields(path = %self.path.display(), players = counts.len()))]
    pub fn save(&self, counts: &BTreeMap<String, u32>) -> Result<(), StoreError> {
        let content: String = counts
            .iter()
            .map(|(name, count)| format!("{}:{}\n", name, count))
            .collect();
        std::fs::write(&self.path, content).map_err(|e| {
            StoreError::new(format!("Failed to write '{}': {}", self.path.display(), e))
        })?;
        debug!("Win counts saved");
        Ok(())
    }
}

fn parse_line(line: &str) -> Option<(&str, u32)> {
    let (name, count) = line.rsplit_once(':')?;
    if name.is_empty() {
        return None;
    }
    Some((name, count.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("Alice:3"), Some(("Alice", 3)));
        assert_eq!(parse_line("Dr: Who:7"), Some(("Dr: Who", 7)));
        assert_eq!(parse_line("Bob:2\r"), Some(("Bob", 2)));
        assert_eq!(parse_line("Carol"), None);
        assert_eq!(parse_line("Dave:many"), None);
        assert_eq!(parse_line(":4"), None);
        assert_eq!(parse_line("Eve:-1"), None);
    }
}
