//! Flat-file persistence for win counts and result history.

mod error;
mod results;
mod win_counts;

pub use error::StoreError;
pub use results::ResultLog;
pub use win_counts::WinCountStore;

use std::path::Path;
use tracing::warn;

/// Reads `path` as text, replacing invalid UTF-8 instead of failing.
fn read_lossy(path: &Path) -> Result<String, StoreError> {
    let bytes = std::fs::read(path)
        .map_err(|e| StoreError::new(format!("Failed to read '{}': {}", path.display(), e)))?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            warn!(path = %path.display(), "File is not valid UTF-8, replacing bad bytes");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
