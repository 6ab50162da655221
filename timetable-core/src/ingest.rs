//! The ingestion pipeline: parse boundary -> normalizer -> store.

use crate::error::{IngestError, NormalizeError};
use crate::event::{ClassEvent, RawEvent};
use crate::ics::parse_events;
use crate::store::ScheduleStore;

/// How per-event normalization failures are handled.
///
/// Strict is the default: the first bad event aborts the whole batch and the
/// store is left untouched, which keeps the atomic-replace invariant trivial.
/// Lenient skips bad events, loads the rest, and reports what was skipped.
/// Neither mode ever lets an invalid event into the schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IngestMode {
    #[default]
    Strict,
    Lenient,
}

/// One event skipped by a lenient ingestion run.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEvent {
    /// Zero-based position of the event in the parsed file.
    pub position: usize,
    pub name: String,
    pub reason: NormalizeError,
}

/// Outcome of a successful ingestion run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    /// Number of events loaded into the schedule.
    pub loaded: usize,
    /// Events skipped in lenient mode (always empty in strict mode).
    pub skipped: Vec<SkippedEvent>,
}

/// Normalize a batch of raw events and atomically replace the schedule.
///
/// On success `replace_all` is called exactly once with every valid event, in
/// file order. On failure the store is not touched and the prior schedule
/// stays visible.
pub fn ingest(
    store: &ScheduleStore,
    raws: Vec<RawEvent>,
    mode: IngestMode,
) -> Result<IngestReport, IngestError> {
    let mut events: Vec<ClassEvent> = Vec::with_capacity(raws.len());
    let mut skipped: Vec<SkippedEvent> = Vec::new();

    for (position, raw) in raws.into_iter().enumerate() {
        match ClassEvent::normalize(raw.clone()) {
            Ok(event) => events.push(event),
            Err(reason) => match mode {
                IngestMode::Strict => return Err(IngestError::for_event(position, &raw, reason)),
                IngestMode::Lenient => skipped.push(SkippedEvent {
                    position,
                    name: raw.name.unwrap_or_default(),
                    reason,
                }),
            },
        }
    }

    let loaded = events.len();
    store.replace_all(events);

    Ok(IngestReport { loaded, skipped })
}

/// Parse ICS text and ingest it in one step.
///
/// A file-level parse failure surfaces as [`IngestError::FileFormat`] before
/// any event reaches the normalizer; the store is not touched.
pub fn ingest_ics(
    store: &ScheduleStore,
    content: &str,
    mode: IngestMode,
) -> Result<IngestReport, IngestError> {
    let raws = parse_events(content)?;
    ingest(store, raws, mode)
}
