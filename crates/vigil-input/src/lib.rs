//! vigil-input — input adapters for vigil.
//!
//! Each adapter reads one static file per run and produces the tagged
//! [`RawInput`] the core normalizer consumes. There is no tailing, no
//! watching, and no retrying: a [`LoadError`] halts the run with no
//! partial results.

pub mod loglines;
pub mod table;

use std::path::{Path, PathBuf};
use thiserror::Error;
use vigil_core::{Layout, RawInput};

/// Why an input file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or unreadable.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was readable but holds no table — empty, or no header row.
    #[error("{path} is not a table: empty or missing a header row")]
    NotATable { path: PathBuf },
}

/// Read `path` as the given [`Layout`]. `delimiter` only applies to the
/// structured layout.
pub fn load(path: &Path, layout: Layout, delimiter: char) -> Result<RawInput, LoadError> {
    match layout {
        Layout::Structured => Ok(RawInput::Table(table::read_table(path, delimiter)?)),
        Layout::LogLines => Ok(RawInput::Lines(loglines::read_lines(path)?)),
    }
}
