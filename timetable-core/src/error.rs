//! Error types for the timetable ecosystem.

use std::fmt;

use thiserror::Error;

use crate::event::RawEvent;

/// Which of an event's two timestamps failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampKind {
    Start,
    End,
}

impl fmt::Display for TimestampKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimestampKind::Start => write!(f, "start"),
            TimestampKind::End => write!(f, "end"),
        }
    }
}

/// Why a single raw event was rejected by normalization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("missing or unparseable {0} timestamp")]
    MissingOrInvalidTimestamp(TimestampKind),

    #[error("event ends before it starts ({end} < {start})")]
    InvalidInterval {
        start: chrono::NaiveDateTime,
        end: chrono::NaiveDateTime,
    },
}

/// Why an ingestion run failed as a whole.
///
/// `FileFormat` comes from the ICS parse boundary and always aborts with no
/// schedule change. `Event` is the strict-mode rejection of a batch on its
/// first bad event; the prior schedule stays visible.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IngestError {
    #[error("calendar file could not be parsed: {0}")]
    FileFormat(String),

    #[error("event #{position} ('{name}') rejected: {source}")]
    Event {
        /// Zero-based position of the event in the parsed file.
        position: usize,
        name: String,
        source: NormalizeError,
    },
}

impl IngestError {
    /// Build the strict-mode rejection for one bad raw event.
    pub(crate) fn for_event(position: usize, raw: &RawEvent, source: NormalizeError) -> Self {
        IngestError::Event {
            position,
            name: raw.name.clone().unwrap_or_default(),
            source,
        }
    }
}
