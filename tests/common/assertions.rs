//! Domain-specific assertion macros for vigil harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages
//! that make it clear *what* pipeline invariant was violated and *where*
//! in the load → normalize → filter → aggregate chain it happened.

use vigil_core::aggregate::WeekdayCount;

// ---------------------------------------------------------------------------
// Count-table assertions
// ---------------------------------------------------------------------------

/// Assert that a date-keyed count table holds an exact count for a day.
///
/// ```rust
/// assert_day_count!(daily, "2024-01-01", 2);
/// ```
#[macro_export]
macro_rules! assert_day_count {
    ($table:expr, $day:expr, $count:expr) => {{
        let key = $crate::common::date($day);
        match $table.get(&key) {
            Some(actual) if *actual == $count => {}
            Some(actual) => panic!(
                "assert_day_count! failed:\n  table[{}]\n  expected: {}\n  actual:   {}",
                $day, $count, actual
            ),
            None => panic!(
                "assert_day_count! failed: {} not in table.\n  Observed days: {:?}",
                $day,
                $table.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that a date-keyed count table has no entry for a day (gaps are
/// not filled in).
#[macro_export]
macro_rules! assert_day_absent {
    ($table:expr, $day:expr) => {{
        let key = $crate::common::date($day);
        if let Some(actual) = $table.get(&key) {
            panic!(
                "assert_day_absent! failed: {} should be absent but has count {}",
                $day, actual
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Filter result assertions
// ---------------------------------------------------------------------------

/// Assert that every filtered event satisfies a predicate.
///
/// ```rust
/// assert_filtered_all!(filtered, |e| e.user == "alice");
/// ```
#[macro_export]
macro_rules! assert_filtered_all {
    ($results:expr, $pred:expr) => {{
        let results: &[vigil_core::Event] = &$results;
        let pred = $pred;
        let failing: Vec<_> = results.iter().filter(|e| !pred(e)).collect();
        if !failing.is_empty() {
            panic!(
                "assert_filtered_all! failed: {} of {} events did not satisfy predicate.\n  first: {:?}",
                failing.len(),
                results.len(),
                failing[0]
            );
        }
    }};
}

/// Assert that the filtered sequence lists exactly these users, in order.
#[macro_export]
macro_rules! assert_user_sequence {
    ($results:expr, $users:expr) => {{
        let actual: Vec<&str> = $results.iter().map(|e| e.user.as_str()).collect();
        let expected: Vec<&str> = $users.to_vec();
        pretty_assertions::assert_eq!(actual, expected, "filtered user order mismatch");
    }};
}

// ---------------------------------------------------------------------------
// Weekday invariant helpers
// ---------------------------------------------------------------------------

/// Assert the weekday table lists all seven days Monday→Sunday — the one
/// aggregate that fills gaps instead of omitting them.
pub fn assert_weekday_order(weekdays: &[WeekdayCount]) {
    let names: Vec<&str> = weekdays.iter().map(|w| w.weekday).collect();
    assert_eq!(
        names,
        [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday"
        ],
        "weekday table must list all seven days in Monday→Sunday order"
    );
}
