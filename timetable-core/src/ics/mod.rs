//! The ICS parse boundary.
//!
//! Reading the RFC 5545 format is delegated to the icalendar crate's parser;
//! this module only maps its output into `RawEvent`s.

mod parse;

pub use parse::parse_events;
