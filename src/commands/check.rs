use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use timetable_core::{IngestMode, ScheduleStore, ingest_ics};

/// Validate a schedule file: load it leniently and report every rejection.
pub fn run(file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)?;

    let store = ScheduleStore::new();
    let report = ingest_ics(&store, &content, IngestMode::Lenient)?;

    for skipped in &report.skipped {
        println!(
            "{} event #{} ('{}'): {}",
            "rejected".red(),
            skipped.position,
            skipped.name,
            skipped.reason
        );
    }

    let schedule = store.snapshot();
    println!(
        "{} valid, {} rejected",
        report.loaded.to_string().green(),
        report.skipped.len()
    );

    // Smoke check: the first event should survive ingestion intact
    if let Some(first) = schedule.first() {
        println!("First event: {} ({})", first.name(), first.start_display());
    }

    for line in schedule.summary_lines() {
        println!("  {}", line.dimmed());
    }

    Ok(())
}
