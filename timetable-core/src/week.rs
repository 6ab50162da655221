//! Weekday helpers shared by bucketing and display ordering.
//!
//! The schedule's backing map is unordered; Monday-first iteration is a
//! display concern and lives here, as does the single weekday-of-timestamp
//! function used everywhere an event gets bucketed.

use chrono::{Datelike, NaiveDateTime, Weekday};

/// The seven weekdays in display order, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Weekday a timestamp falls on (proleptic Gregorian, no zone shifting).
pub fn weekday_of(ts: NaiveDateTime) -> Weekday {
    ts.weekday()
}

/// Full English name, e.g. "Monday".
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
