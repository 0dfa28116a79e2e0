//! Error taxonomy for the normalisation layer.
//!
//! Both variants are fatal to the current run: the caller reports them and
//! halts, no partial results. Row-level mismatches never surface here —
//! the normalizer recovers from those locally by skipping the row.

use thiserror::Error;

/// Why a raw input could not be normalised into a canonical event sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// The table is missing required columns. Distinguishes a wrong table
    /// from a wrong file format; the message names what is absent.
    #[error("missing required columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    /// Not a single log line matched the login pattern. Indicates a
    /// format mismatch rather than a missing-column mismatch.
    #[error("no log lines matched the login pattern")]
    EmptyResult,
}
