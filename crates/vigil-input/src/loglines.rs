//! Log-line adapter — reads a raw log file into one line per entry.
//!
//! Blank lines are dropped here; whether a line means anything is decided
//! by the normalizer's pattern match, not by the reader.

use crate::LoadError;
use std::path::Path;

pub fn read_lines(path: &Path) -> Result<Vec<String>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    tracing::debug!(path = %path.display(), lines = lines.len(), "log file loaded");
    Ok(lines)
}
