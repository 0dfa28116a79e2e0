//! Filter Engine — narrows the canonical event sequence for display.
//!
//! A [`FilterSpec`] is an explicit, immutable value: the caller builds one
//! per interaction and passes it in, there is no ambient selection state.
//! Filtering is a stable conjunction of predicates — output preserves the
//! relative order of the input, and an event must satisfy every predicate
//! to pass.

use crate::types::Event;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// The user-chosen constraints narrowing the canonical sequence.
///
/// Membership sets mirror multi-select widgets: an empty set means *no
/// selection*, which matches nothing. Use [`FilterSpec::covering`] for the
/// everything-selected default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    /// Inclusive lower bound, compared against the event's calendar date.
    pub date_from: NaiveDate,
    /// Inclusive upper bound, compared against the event's calendar date.
    pub date_to: NaiveDate,
    /// Selected users. Empty matches none.
    pub users: BTreeSet<String>,
    /// Selected source addresses. Empty matches none.
    pub addresses: BTreeSet<String>,
    /// Free-text needle. Matched case-insensitively against `user` and
    /// case-sensitively against `address` — the asymmetry is inherited
    /// from the source behaviour and kept as-is. Empty or absent text
    /// matches everything.
    pub search_text: Option<String>,
}

impl FilterSpec {
    /// Build the spec that selects everything observed in `events`: the
    /// full date range and the full user/address sets. Returns `None` for
    /// an empty sequence, where no date range exists.
    pub fn covering(events: &[Event]) -> Option<Self> {
        let dates: Vec<NaiveDate> = events.iter().map(|e| e.timestamp.date()).collect();
        let date_from = *dates.iter().min()?;
        let date_to = *dates.iter().max()?;

        Some(Self {
            date_from,
            date_to,
            users: events.iter().map(|e| e.user.clone()).collect(),
            addresses: events.iter().map(|e| e.address.clone()).collect(),
            search_text: None,
        })
    }

    fn matches(&self, event: &Event) -> bool {
        let date = event.timestamp.date();
        if date < self.date_from || date > self.date_to {
            return false;
        }
        if !self.users.contains(&event.user) {
            return false;
        }
        if !self.addresses.contains(&event.address) {
            return false;
        }
        match self.search_text.as_deref() {
            None | Some("") => true,
            Some(needle) => {
                event.user.to_lowercase().contains(&needle.to_lowercase())
                    || event.address.contains(needle)
            }
        }
    }
}

/// Apply `spec` to the canonical sequence, returning the matching
/// subsequence in its original order.
pub fn apply(events: &[Event], spec: &FilterSpec) -> Vec<Event> {
    events.iter().filter(|e| spec.matches(e)).cloned().collect()
}
