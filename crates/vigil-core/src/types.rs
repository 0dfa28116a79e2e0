//! Core types for vigil-core.
//!
//! This module defines the fundamental data structures shared across all
//! pipeline layers: the canonical [`Event`], the raw-input shapes
//! [`RawTable`] and [`RawInput`], and the [`Layout`] discriminant used to
//! select between them.

use chrono::NaiveDateTime;
use serde::Deserialize;

/// One normalised login/connection record.
///
/// The canonical sequence of events is built once per input load and is
/// immutable afterward; the filter and aggregate layers only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Combined date+time of the connection. Naive local time — the source
    /// data carries no timezone.
    pub timestamp: NaiveDateTime,
    /// Short user identifier, non-empty after normalisation.
    pub user: String,
    /// IPv4 source address as a string. Only pattern-validated on the
    /// log-line path; table cells are taken as-is.
    pub address: String,
}

impl Event {
    pub fn new(timestamp: NaiveDateTime, user: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            timestamp,
            user: user.into(),
            address: address.into(),
        }
    }
}

/// A raw tabular input: one header row plus data rows, cells as strings.
///
/// This is what the table adapter reads off disk; the normalizer resolves
/// the headers against its column vocabulary before touching any row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }
}

/// Raw input handed to the normalizer, tagged by shape.
///
/// The two variants correspond to the two supported file layouts: a table
/// with named columns, or a single unlabelled column of free-text log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Layout A — named columns (date / time / user / address).
    Table(RawTable),
    /// Layout B — one raw log line per row.
    Lines(Vec<String>),
}

/// Which input layout a file should be read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    Structured,
    LogLines,
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Structured => write!(f, "structured"),
            Layout::LogLines => write!(f, "log-lines"),
        }
    }
}

impl std::str::FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "structured" => Ok(Layout::Structured),
            "log-lines" => Ok(Layout::LogLines),
            other => Err(format!("unknown layout {other:?} (expected \"structured\" or \"log-lines\")")),
        }
    }
}
