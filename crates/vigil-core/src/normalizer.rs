//! Normalizer — converts heterogeneous raw input into canonical [`Event`]s.
//!
//! The strategy is selected by the [`RawInput`] tag. Tables resolve their
//! headers against a fixed column vocabulary before any row is touched;
//! log lines are matched one-by-one against the login pattern. In both
//! shapes a row that cannot be parsed is dropped, never an error — the
//! fatal cases are a table missing required columns
//! ([`NormalizeError::Schema`]) and a line input where nothing at all
//! matched ([`NormalizeError::EmptyResult`]).

use crate::error::NormalizeError;
use crate::types::{Event, RawInput, RawTable};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

/// Timestamp pattern when date and time arrive in separate columns.
const SPLIT_TIMESTAMP: &str = "%Y-%m-%d %H:%M";

/// Role a table column plays in the canonical event, resolved from its
/// header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Date,
    Time,
    User,
    Address,
}

/// Header vocabulary across the known source variants. Lookup is done on
/// the trimmed, lowercased header, so the map only carries lowercase keys.
static COLUMN_ROLES: phf::Map<&'static str, Role> = phf::phf_map! {
    "дата" => Role::Date,
    "date" => Role::Date,
    "время" => Role::Time,
    "time" => Role::Time,
    "пользователь" => Role::User,
    "user" => Role::User,
    "username" => Role::User,
    "ip" => Role::Address,
    "ip-адрес" => Role::Address,
    "address" => Role::Address,
};

/// `<date> <time>,<fraction> Login successful for <user> from <IPv4>` —
/// the one line shape the unstructured path recognises.
const LOGIN_LINE: &str = r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}),\d+ Login successful for (\S+) from (\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})\b";

fn login_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(LOGIN_LINE).expect("login pattern must compile"))
}

/// Normalise raw input into the canonical event sequence.
///
/// Pure: same input, same output, no side effects beyond debug diagnostics
/// for dropped rows.
pub fn normalize(input: &RawInput) -> Result<Vec<Event>, NormalizeError> {
    match input {
        RawInput::Table(table) => normalize_table(table),
        RawInput::Lines(lines) => normalize_lines(lines),
    }
}

// ---------------------------------------------------------------------------
// Layout A — structured table
// ---------------------------------------------------------------------------

/// Resolved column indices. `time` is optional: without it the date column
/// must carry a combined date+time value.
#[derive(Debug, Clone, Copy)]
struct Columns {
    date: usize,
    time: Option<usize>,
    user: usize,
    address: usize,
}

fn resolve_columns(headers: &[String]) -> Result<Columns, NormalizeError> {
    let mut date = None;
    let mut time = None;
    let mut user = None;
    let mut address = None;

    for (idx, header) in headers.iter().enumerate() {
        let slot = match COLUMN_ROLES.get(header.trim().to_lowercase().as_str()) {
            Some(Role::Date) => &mut date,
            Some(Role::Time) => &mut time,
            Some(Role::User) => &mut user,
            Some(Role::Address) => &mut address,
            None => continue,
        };
        // First matching header wins; repeats are ignored.
        slot.get_or_insert(idx);
    }

    if let (Some(date), Some(user), Some(address)) = (date, user, address) {
        return Ok(Columns { date, time, user, address });
    }

    let mut missing = Vec::new();
    if date.is_none() {
        missing.push("date".to_string());
    }
    if user.is_none() {
        missing.push("user".to_string());
    }
    if address.is_none() {
        missing.push("address".to_string());
    }
    Err(NormalizeError::Schema { missing })
}

fn normalize_table(table: &RawTable) -> Result<Vec<Event>, NormalizeError> {
    let cols = resolve_columns(&table.headers)?;

    let mut events = Vec::with_capacity(table.rows.len());
    let mut skipped = 0usize;
    for row in &table.rows {
        match parse_row(row, cols) {
            Some(event) => events.push(event),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "dropped malformed table rows");
    }
    Ok(events)
}

fn parse_row(row: &[String], cols: Columns) -> Option<Event> {
    let date = row.get(cols.date)?.trim();
    let user = row.get(cols.user)?.trim();
    let address = row.get(cols.address)?.trim();
    if user.is_empty() || address.is_empty() {
        return None;
    }

    let timestamp = match cols.time {
        Some(time_idx) => {
            let time = row.get(time_idx)?.trim();
            NaiveDateTime::parse_from_str(&format!("{date} {time}"), SPLIT_TIMESTAMP).ok()?
        }
        None => parse_combined(date)?,
    };

    Some(Event::new(timestamp, user, address))
}

/// Parse a combined date+time cell, falling back to a bare date at
/// midnight. The accepted shapes match what the source variants fed into
/// their date parser.
fn parse_combined(cell: &str) -> Option<NaiveDateTime> {
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(cell, format) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(cell, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

// ---------------------------------------------------------------------------
// Layout B — raw log lines
// ---------------------------------------------------------------------------

fn normalize_lines(lines: &[String]) -> Result<Vec<Event>, NormalizeError> {
    let pattern = login_pattern();

    let mut events = Vec::new();
    let mut skipped = 0usize;
    for line in lines {
        let Some(caps) = pattern.captures(line) else {
            skipped += 1;
            continue;
        };
        let Ok(timestamp) = NaiveDateTime::parse_from_str(&caps[1], "%Y-%m-%d %H:%M:%S") else {
            skipped += 1;
            continue;
        };
        events.push(Event::new(timestamp, &caps[2], &caps[3]));
    }
    if skipped > 0 {
        tracing::debug!(skipped, "dropped lines not matching the login pattern");
    }

    if events.is_empty() {
        return Err(NormalizeError::EmptyResult);
    }
    Ok(events)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
