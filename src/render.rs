//! Terminal rendering for the weekly schedule.
//!
//! Extension traits adding colored output to timetable-core types using
//! owo_colors.

use owo_colors::OwoColorize;
use timetable_core::week::weekday_name;
use timetable_core::{ClassEvent, WeeklySchedule};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ClassEvent {
    fn render(&self) -> String {
        let times = format!(
            "{} - {}",
            self.start().format("%I:%M %p"),
            self.end().format("%I:%M %p")
        );

        let mut line = format!("{}  {}", times.dimmed(), self.name());
        if !self.location().is_empty() {
            line.push_str(&format!(" {}", format!("({})", self.location()).dimmed()));
        }
        line
    }
}

/// Render one weekday's section: a header plus one line per event.
pub fn render_day(day: chrono::Weekday, events: &[ClassEvent]) -> String {
    let mut lines = vec![weekday_name(day).cyan().bold().to_string()];

    if events.is_empty() {
        lines.push(format!("   {}", "No classes".dimmed()));
    } else {
        for event in events {
            lines.push(format!("   {}", event.render()));
        }
    }

    lines.join("\n")
}

/// Render the full week, Monday through Sunday.
pub fn render_week(schedule: &WeeklySchedule) -> String {
    let sections: Vec<String> = schedule
        .days()
        .map(|(day, events)| render_day(day, events))
        .collect();

    sections.join("\n\n")
}
