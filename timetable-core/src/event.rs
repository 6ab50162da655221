//! Raw and validated event types.
//!
//! `RawEvent` is what the ICS parse boundary hands us: every field may be
//! missing. `ClassEvent` is the validated, immutable record the rest of the
//! system works with; it can only be built through [`ClassEvent::normalize`].

use chrono::{NaiveDateTime, Weekday};
use serde::Serialize;

use crate::error::{NormalizeError, TimestampKind};
use crate::week;

/// An unvalidated event record as produced by parsing, prior to normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEvent {
    pub name: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub location: Option<String>,
}

/// A single validated class occurrence.
///
/// Immutable once constructed: fields are private and only read accessors are
/// exposed. Invariant: `end >= start` (equal timestamps are permitted for
/// zero-duration marker events).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassEvent {
    name: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    location: String,
}

impl ClassEvent {
    /// Validate one raw event into a `ClassEvent`.
    ///
    /// Rules, applied in order:
    /// 1. both timestamps must be present, else `MissingOrInvalidTimestamp`
    /// 2. `end >= start`, else `InvalidInterval`
    /// 3. a missing name or location defaults to the empty string
    ///
    /// Pure: no side effects, aggregation into a schedule is a separate step.
    pub fn normalize(raw: RawEvent) -> Result<ClassEvent, NormalizeError> {
        let start = raw
            .start
            .ok_or(NormalizeError::MissingOrInvalidTimestamp(TimestampKind::Start))?;
        let end = raw
            .end
            .ok_or(NormalizeError::MissingOrInvalidTimestamp(TimestampKind::End))?;

        if end < start {
            return Err(NormalizeError::InvalidInterval { start, end });
        }

        Ok(ClassEvent {
            name: raw.name.unwrap_or_default(),
            start,
            end,
            location: raw.location.unwrap_or_default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Weekday this event is bucketed under (computed from `start` only,
    /// even for events that span midnight).
    pub fn weekday(&self) -> Weekday {
        week::weekday_of(self.start)
    }

    /// Human-readable start, e.g. "Monday at 09:00 AM".
    ///
    /// Rendered from the event's own timestamp, not from the bucket it sits
    /// in, so it stays correct independently of bucketing.
    pub fn start_display(&self) -> String {
        self.start.format("%A at %I:%M %p").to_string()
    }

    /// Human-readable end, e.g. "Monday at 09:50 AM".
    pub fn end_display(&self) -> String {
        self.end.format("%A at %I:%M %p").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        // September 2025: the 1st is a Monday
        NaiveDate::from_ymd_opt(2025, 9, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn raw(name: &str, start: NaiveDateTime, end: NaiveDateTime) -> RawEvent {
        RawEvent {
            name: Some(name.to_string()),
            start: Some(start),
            end: Some(end),
            location: Some("Room 1".to_string()),
        }
    }

    #[test]
    fn normalize_accepts_valid_event() {
        let event = ClassEvent::normalize(raw("Calculus", ts(1, 9, 0), ts(1, 9, 50))).unwrap();

        assert_eq!(event.name(), "Calculus");
        assert_eq!(event.location(), "Room 1");
        assert_eq!(event.weekday(), Weekday::Mon);
    }

    #[test]
    fn normalize_rejects_missing_start() {
        let raw = RawEvent {
            name: Some("Calculus".to_string()),
            start: None,
            end: Some(ts(1, 9, 50)),
            location: None,
        };

        assert_eq!(
            ClassEvent::normalize(raw),
            Err(NormalizeError::MissingOrInvalidTimestamp(TimestampKind::Start))
        );
    }

    #[test]
    fn normalize_rejects_missing_end() {
        let raw = RawEvent {
            name: None,
            start: Some(ts(1, 9, 0)),
            end: None,
            location: None,
        };

        assert_eq!(
            ClassEvent::normalize(raw),
            Err(NormalizeError::MissingOrInvalidTimestamp(TimestampKind::End))
        );
    }

    #[test]
    fn normalize_rejects_end_before_start() {
        // End one minute before start
        let result = ClassEvent::normalize(raw("Backwards", ts(1, 9, 0), ts(1, 8, 59)));

        assert_eq!(
            result,
            Err(NormalizeError::InvalidInterval {
                start: ts(1, 9, 0),
                end: ts(1, 8, 59),
            })
        );
    }

    #[test]
    fn normalize_accepts_zero_duration() {
        let event = ClassEvent::normalize(raw("Deadline", ts(1, 12, 0), ts(1, 12, 0))).unwrap();
        assert_eq!(event.start(), event.end());
    }

    #[test]
    fn normalize_defaults_missing_name_and_location_to_empty() {
        let raw = RawEvent {
            name: None,
            start: Some(ts(1, 9, 0)),
            end: Some(ts(1, 9, 50)),
            location: None,
        };

        let event = ClassEvent::normalize(raw).unwrap();
        assert_eq!(event.name(), "");
        assert_eq!(event.location(), "");
    }

    #[test]
    fn weekday_agrees_with_the_shared_weekday_function() {
        let event = ClassEvent::normalize(raw("Lab", ts(3, 13, 0), ts(3, 15, 0))).unwrap();

        assert_eq!(event.weekday(), week::weekday_of(event.start()));
        assert_eq!(event.weekday(), Weekday::Wed);
    }

    #[test]
    fn display_renders_weekday_and_twelve_hour_clock() {
        let event = ClassEvent::normalize(raw("Calculus", ts(1, 9, 0), ts(1, 13, 30))).unwrap();

        assert_eq!(event.start_display(), "Monday at 09:00 AM");
        assert_eq!(event.end_display(), "Monday at 01:30 PM");
    }
}
