//! ICS file parsing using the icalendar crate's parser.

use chrono::NaiveDateTime;
use icalendar::{
    DatePerhapsTime,
    parser::{read_calendar, unfold},
};

use crate::error::IngestError;
use crate::event::RawEvent;

/// Parse ICS content into raw, unvalidated events.
///
/// A file that cannot be read as a calendar at all fails with
/// [`IngestError::FileFormat`]. Per-event problems (absent or unparseable
/// DTSTART/DTEND) do not fail here: the field stays `None` so the normalizer
/// can reject the event with its name and position attached. A calendar with
/// no VEVENTs yields an empty batch.
pub fn parse_events(content: &str) -> Result<Vec<RawEvent>, IngestError> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(IngestError::FileFormat)?;

    let events = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(|vevent| RawEvent {
            name: vevent.find_prop("SUMMARY").map(|p| p.val.to_string()),
            start: vevent
                .find_prop("DTSTART")
                .and_then(|p| DatePerhapsTime::try_from(p).ok())
                .map(to_naive),
            end: vevent
                .find_prop("DTEND")
                .and_then(|p| DatePerhapsTime::try_from(p).ok())
                .map(to_naive),
            location: vevent.find_prop("LOCATION").map(|p| p.val.to_string()),
        })
        .collect();

    Ok(events)
}

/// Flatten icalendar's DatePerhapsTime to a wall-clock NaiveDateTime.
///
/// No timezone conversion is performed: UTC and zoned values keep the
/// wall-clock time they were written with, and all-day dates land at
/// midnight.
fn to_naive(dpt: DatePerhapsTime) -> NaiveDateTime {
    match dpt {
        DatePerhapsTime::Date(d) => d.and_hms_opt(0, 0, 0).unwrap_or_default(),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            icalendar::CalendarDateTime::Utc(dt) => dt.naive_utc(),
            icalendar::CalendarDateTime::Floating(naive) => naive,
            icalendar::CalendarDateTime::WithTimezone { date_time, .. } => date_time,
        },
    }
}
