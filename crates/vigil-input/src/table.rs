//! Table adapter — reads a delimited text table into a [`RawTable`].
//!
//! The first non-blank line is the header row; every following non-blank
//! line is a data row. Cells are trimmed but otherwise taken verbatim —
//! validating them is the normalizer's job, not the reader's.

use crate::LoadError;
use std::path::Path;
use vigil_core::RawTable;

pub fn read_table(path: &Path, delimiter: char) -> Result<RawTable, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let Some(header_line) = lines.next() else {
        return Err(LoadError::NotATable {
            path: path.to_path_buf(),
        });
    };

    let headers = split_cells(header_line, delimiter);
    let rows: Vec<Vec<String>> = lines.map(|line| split_cells(line, delimiter)).collect();

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "table loaded"
    );
    Ok(RawTable::new(headers, rows))
}

fn split_cells(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(|cell| cell.trim().to_string()).collect()
}
