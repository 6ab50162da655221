//! Core types for the timetable ecosystem.
//!
//! Pipeline: ICS text -> [`ics::parse_events`] -> raw events ->
//! [`ClassEvent::normalize`] -> [`ScheduleStore::replace_all`] -> read via
//! [`ScheduleStore::snapshot`]. The CLI and server crates are thin consumers
//! of these entry points.

pub mod error;
pub mod event;
pub mod ics;
pub mod ingest;
pub mod schedule;
pub mod store;
pub mod week;

pub use error::{IngestError, NormalizeError, TimestampKind};
pub use event::{ClassEvent, RawEvent};
pub use ingest::{IngestMode, IngestReport, SkippedEvent, ingest, ingest_ics};
pub use schedule::WeeklySchedule;
pub use store::ScheduleStore;
