//! Aggregator — derived counting views over a filtered event sequence.
//!
//! Every aggregate is a pure reduction: independent of the others, safe to
//! recompute on every filter change, and empty-in → empty-out (the weekday
//! view still lists all seven days, zero-filled — the one aggregate that
//! fills gaps). Keys that never occur in the data are otherwise omitted,
//! not zero-filled; the presentation layer decides how to render gaps.

use crate::types::Event;
use chrono::{Datelike, NaiveDate, Timelike};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Events per (date, address) pair above which the pair is flagged.
/// The source exposes no configuration surface for this, so neither do we.
pub const SUSPICIOUS_THRESHOLD: u64 = 20;

/// How many rows the top-users view keeps.
pub const TOP_USERS: usize = 10;

/// Monday-first weekday labels, the order the weekday chart renders in.
const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// One row of the top-users table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCount {
    pub user: String,
    pub count: u64,
}

/// One cell of the day-of-month × month calendar heat-map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarBin {
    pub day: u32,
    pub month: u32,
    pub total: u64,
}

/// One flagged (date, address) pair of the suspicious-activity table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuspiciousPair {
    pub date: NaiveDate,
    pub address: String,
    pub count: u64,
}

/// One bar of the weekday chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub weekday: &'static str,
    pub count: u64,
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Events per calendar date. Days with no events do not appear.
pub fn daily_counts(events: &[Event]) -> BTreeMap<NaiveDate, u64> {
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(event.timestamp.date()).or_default() += 1;
    }
    counts
}

/// Day-of-month × month density, derived from the daily counts rather than
/// the raw events. Bins come out sorted by (month, day).
pub fn calendar_density(daily: &BTreeMap<NaiveDate, u64>) -> Vec<CalendarBin> {
    let mut bins: BTreeMap<(u32, u32), u64> = BTreeMap::new();
    for (date, count) in daily {
        *bins.entry((date.month(), date.day())).or_default() += count;
    }
    bins.into_iter()
        .map(|((month, day), total)| CalendarBin { day, month, total })
        .collect()
}

/// Events per hour of day (0–23). Hours with no events do not appear.
pub fn hourly_counts(events: &[Event]) -> BTreeMap<u32, u64> {
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(event.timestamp.hour()).or_default() += 1;
    }
    counts
}

/// The ten busiest users, descending by count. Ties keep first-encounter
/// order (the sort is stable over the order users appear in the input).
pub fn top_users(events: &[Event]) -> Vec<UserCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<UserCount> = Vec::new();
    for event in events {
        match index.get(event.user.as_str()).copied() {
            Some(i) => counts[i].count += 1,
            None => {
                index.insert(event.user.as_str(), counts.len());
                counts.push(UserCount {
                    user: event.user.clone(),
                    count: 1,
                });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_USERS);
    counts
}

/// Distinct users per calendar date.
pub fn unique_users_per_day(events: &[Event]) -> BTreeMap<NaiveDate, u64> {
    let mut users_by_day: BTreeMap<NaiveDate, BTreeSet<&str>> = BTreeMap::new();
    for event in events {
        users_by_day
            .entry(event.timestamp.date())
            .or_default()
            .insert(event.user.as_str());
    }
    users_by_day
        .into_iter()
        .map(|(date, users)| (date, users.len() as u64))
        .collect()
}

/// (date, address) pairs with more than [`SUSPICIOUS_THRESHOLD`] events,
/// sorted by date then address.
pub fn suspicious_pairs(events: &[Event]) -> Vec<SuspiciousPair> {
    let mut counts: BTreeMap<(NaiveDate, &str), u64> = BTreeMap::new();
    for event in events {
        *counts
            .entry((event.timestamp.date(), event.address.as_str()))
            .or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|&(_, count)| count > SUSPICIOUS_THRESHOLD)
        .map(|((date, address), count)| SuspiciousPair {
            date,
            address: address.to_string(),
            count,
        })
        .collect()
}

/// Events per weekday, Monday→Sunday. Unlike the other aggregates, days
/// absent from the data still appear with a zero count.
pub fn weekday_counts(events: &[Event]) -> Vec<WeekdayCount> {
    let mut counts = [0u64; 7];
    for event in events {
        counts[event.timestamp.weekday().num_days_from_monday() as usize] += 1;
    }
    WEEKDAYS
        .iter()
        .zip(counts)
        .map(|(&weekday, count)| WeekdayCount { weekday, count })
        .collect()
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Every aggregate, computed in one pass over the filtered sequence and
/// ready for direct charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub daily: BTreeMap<NaiveDate, u64>,
    pub calendar: Vec<CalendarBin>,
    pub hourly: BTreeMap<u32, u64>,
    pub top_users: Vec<UserCount>,
    pub unique_users_per_day: BTreeMap<NaiveDate, u64>,
    pub suspicious: Vec<SuspiciousPair>,
    pub weekdays: Vec<WeekdayCount>,
}

impl Report {
    pub fn compute(events: &[Event]) -> Self {
        let daily = daily_counts(events);
        let calendar = calendar_density(&daily);
        Self {
            daily,
            calendar,
            hourly: hourly_counts(events),
            top_users: top_users(events),
            unique_users_per_day: unique_users_per_day(events),
            suspicious: suspicious_pairs(events),
            weekdays: weekday_counts(events),
        }
    }
}
