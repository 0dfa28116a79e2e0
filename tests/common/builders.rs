//! Test builders — ergonomic constructors for `Event` and `FilterSpec`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning
//! `Result`.

use chrono::{NaiveDate, NaiveDateTime};
use vigil_core::{Event, FilterSpec};

// ---------------------------------------------------------------------------
// Timestamp helpers
// ---------------------------------------------------------------------------

/// Parse `YYYY-MM-DD HH:MM` into a timestamp. Panics on anything else.
pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .unwrap_or_else(|e| panic!("bad test timestamp {s:?}: {e}"))
}

/// Parse `YYYY-MM-DD` into a date. Panics on anything else.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("bad test date {s:?}: {e}"))
}

// ---------------------------------------------------------------------------
// EventBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Event`] test fixtures.
///
/// # Example
///
/// ```rust
/// let event = EventBuilder::new("alice")
///     .at("2024-01-15 10:00")
///     .address("10.0.0.7")
///     .build();
/// ```
pub struct EventBuilder {
    timestamp: NaiveDateTime,
    user: String,
    address: String,
}

impl EventBuilder {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            timestamp: ts("2024-01-15 10:00"),
            user: user.into(),
            address: "10.0.0.1".to_string(),
        }
    }

    pub fn at(mut self, timestamp: &str) -> Self {
        self.timestamp = ts(timestamp);
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn build(self) -> Event {
        Event {
            timestamp: self.timestamp,
            user: self.user,
            address: self.address,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build an event in one call: `event("2024-01-15 10:00", "alice", "10.0.0.1")`.
pub fn event(timestamp: &str, user: &str, address: &str) -> Event {
    Event::new(ts(timestamp), user, address)
}

/// Build `n` events on the same date sharing one (user, address) pair,
/// one per minute. Handy for the suspicious-pair threshold tests.
pub fn burst(n: u64, day: &str, user: &str, address: &str) -> Vec<Event> {
    (0..n)
        .map(|i| event(&format!("{day} 08:{:02}", i % 60), user, address))
        .collect()
}

/// The everything-selected spec over `events`. Panics on an empty slice.
pub fn spec_all(events: &[Event]) -> FilterSpec {
    FilterSpec::covering(events).expect("spec_all needs a non-empty event sequence")
}
