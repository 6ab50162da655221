use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use chrono::Weekday;
use owo_colors::OwoColorize;
use timetable_core::{IngestMode, ScheduleStore, ingest_ics};

use crate::render::{render_day, render_week};

pub fn run(file: &Path, day: Option<&str>, lenient: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)?;

    let mode = if lenient {
        IngestMode::Lenient
    } else {
        IngestMode::Strict
    };

    let store = ScheduleStore::new();
    let report = ingest_ics(&store, &content, mode)?;

    for skipped in &report.skipped {
        eprintln!(
            "{} skipped event #{} ('{}'): {}",
            "warning:".yellow(),
            skipped.position,
            skipped.name,
            skipped.reason
        );
    }

    let schedule = store.snapshot();

    match day {
        Some(name) => {
            let weekday = Weekday::from_str(name)
                .map_err(|_| anyhow::anyhow!("Unrecognized weekday '{}'", name))?;
            println!("{}", render_day(weekday, schedule.get(weekday)));
        }
        None => println!("{}", render_week(&schedule)),
    }

    Ok(())
}
