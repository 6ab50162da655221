//! The weekly schedule snapshot: events bucketed by weekday, sorted by start.

use std::collections::HashMap;

use chrono::Weekday;

use crate::event::ClassEvent;
use crate::week::{self, WEEK};

/// Events for one week, bucketed by weekday and ordered within each day.
///
/// A `WeeklySchedule` is a value: built once from a batch of events and never
/// mutated afterwards. Invariants:
/// - every event sits in exactly the bucket computed from its own `start`
/// - each bucket is sorted ascending by `start`, ties keeping ingestion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklySchedule {
    buckets: HashMap<Weekday, Vec<ClassEvent>>,
    first: Option<ClassEvent>,
    total: usize,
}

impl WeeklySchedule {
    /// An empty schedule (the state at startup).
    pub fn empty() -> Self {
        WeeklySchedule::default()
    }

    /// Bucket and sort a batch of validated events.
    ///
    /// Input order is preserved within each bucket before the stable sort, so
    /// events with equal start times keep their ingestion order.
    pub fn from_events(events: Vec<ClassEvent>) -> Self {
        let total = events.len();
        let first = events.first().cloned();

        let mut buckets: HashMap<Weekday, Vec<ClassEvent>> = HashMap::new();
        for event in events {
            buckets.entry(event.weekday()).or_default().push(event);
        }
        for day_events in buckets.values_mut() {
            day_events.sort_by_key(|e| e.start());
        }

        WeeklySchedule {
            buckets,
            first,
            total,
        }
    }

    /// The ordered events for one weekday (empty if none).
    pub fn get(&self, day: Weekday) -> &[ClassEvent] {
        self.buckets.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The seven weekdays in Monday-first display order.
    pub fn weekdays() -> [Weekday; 7] {
        WEEK
    }

    /// Iterate every weekday with its events, Monday through Sunday.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[ClassEvent])> {
        WEEK.into_iter().map(|day| (day, self.get(day)))
    }

    /// Total number of events across all buckets.
    pub fn count(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The first-ingested event, for diagnostics and smoke checks.
    pub fn first(&self) -> Option<&ClassEvent> {
        self.first.as_ref()
    }

    /// Render one line per day for terminal-friendly diagnostics.
    pub fn summary_lines(&self) -> Vec<String> {
        self.days()
            .map(|(day, events)| format!("{}: {} event(s)", week::weekday_name(day), events.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RawEvent;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        // September 2025: the 1st is a Monday, the 3rd a Wednesday
        NaiveDate::from_ymd_opt(2025, 9, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn event(name: &str, start: NaiveDateTime, end: NaiveDateTime, location: &str) -> ClassEvent {
        ClassEvent::normalize(RawEvent {
            name: Some(name.to_string()),
            start: Some(start),
            end: Some(end),
            location: Some(location.to_string()),
        })
        .unwrap()
    }

    #[test]
    fn buckets_by_weekday_and_sorts_by_start() {
        let schedule = WeeklySchedule::from_events(vec![
            event("Calculus", ts(1, 9, 0), ts(1, 9, 50), "Room 1"),
            event("Physics", ts(1, 8, 0), ts(1, 8, 50), "Room 2"),
            event("Lab", ts(3, 13, 0), ts(3, 15, 0), "Room 3"),
        ]);

        assert_eq!(schedule.count(), 3);

        let monday: Vec<&str> = schedule
            .get(Weekday::Mon)
            .iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(monday, vec!["Physics", "Calculus"]);

        let wednesday: Vec<&str> = schedule
            .get(Weekday::Wed)
            .iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(wednesday, vec!["Lab"]);

        assert!(schedule.get(Weekday::Tue).is_empty());
    }

    #[test]
    fn every_event_sits_only_in_its_own_weekday() {
        let lab = event("Lab", ts(3, 13, 0), ts(3, 15, 0), "Room 3");
        let schedule = WeeklySchedule::from_events(vec![lab.clone()]);

        for (day, events) in schedule.days() {
            if day == lab.weekday() {
                assert_eq!(events, std::slice::from_ref(&lab));
            } else {
                assert!(events.is_empty());
            }
        }
    }

    #[test]
    fn equal_starts_keep_ingestion_order() {
        let schedule = WeeklySchedule::from_events(vec![
            event("First", ts(1, 9, 0), ts(1, 9, 50), ""),
            event("Second", ts(1, 9, 0), ts(1, 10, 0), ""),
        ]);

        let names: Vec<&str> = schedule
            .get(Weekday::Mon)
            .iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn zero_duration_event_sorts_among_others() {
        let schedule = WeeklySchedule::from_events(vec![
            event("Calculus", ts(1, 9, 0), ts(1, 9, 50), ""),
            event("Deadline", ts(1, 8, 30), ts(1, 8, 30), ""),
        ]);

        let names: Vec<&str> = schedule
            .get(Weekday::Mon)
            .iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(names, vec!["Deadline", "Calculus"]);
    }

    #[test]
    fn ordering_is_non_decreasing_within_each_day() {
        let schedule = WeeklySchedule::from_events(vec![
            event("C", ts(1, 15, 0), ts(1, 16, 0), ""),
            event("A", ts(1, 8, 0), ts(1, 9, 0), ""),
            event("B", ts(1, 11, 0), ts(1, 12, 0), ""),
            event("D", ts(2, 10, 0), ts(2, 11, 0), ""),
        ]);

        for (_, events) in schedule.days() {
            for pair in events.windows(2) {
                assert!(pair[0].start() <= pair[1].start());
            }
        }
    }

    #[test]
    fn first_is_the_first_ingested_event() {
        let schedule = WeeklySchedule::from_events(vec![
            event("Calculus", ts(1, 9, 0), ts(1, 9, 50), ""),
            event("Physics", ts(1, 8, 0), ts(1, 8, 50), ""),
        ]);

        // First by ingestion order, not by schedule position
        assert_eq!(schedule.first().unwrap().name(), "Calculus");
    }

    #[test]
    fn empty_batch_yields_empty_schedule() {
        let schedule = WeeklySchedule::from_events(vec![]);

        assert!(schedule.is_empty());
        assert_eq!(schedule.count(), 0);
        assert!(schedule.first().is_none());
        for (_, events) in schedule.days() {
            assert!(events.is_empty());
        }
    }
}
