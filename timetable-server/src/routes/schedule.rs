//! Schedule upload and read endpoints

use std::str::FromStr;

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::{get, put},
    Json,
};
use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use timetable_core::week::weekday_name;
use timetable_core::{ClassEvent, IngestMode, WeeklySchedule, ingest_ics};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/schedule", put(upload_schedule))
        .route("/schedule", get(get_schedule))
        .route("/schedule/{day}", get(get_day))
}

/// Event info returned by API
#[derive(Debug, Serialize, PartialEq)]
pub struct EventView {
    pub name: String,
    pub location: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub start_display: String,
    pub end_display: String,
}

impl From<&ClassEvent> for EventView {
    fn from(event: &ClassEvent) -> Self {
        EventView {
            name: event.name().to_string(),
            location: event.location().to_string(),
            start: event.start(),
            end: event.end(),
            start_display: event.start_display(),
            end_display: event.end_display(),
        }
    }
}

/// One weekday's section of the schedule view
#[derive(Debug, Serialize, PartialEq)]
pub struct DayView {
    pub day: &'static str,
    pub events: Vec<EventView>,
}

/// The full week, Monday through Sunday
#[derive(Debug, Serialize, PartialEq)]
pub struct ScheduleView {
    pub total: usize,
    pub days: Vec<DayView>,
}

/// Build the Monday-first week view from a schedule snapshot.
fn schedule_view(schedule: &WeeklySchedule) -> ScheduleView {
    ScheduleView {
        total: schedule.count(),
        days: schedule
            .days()
            .map(|(day, events)| DayView {
                day: weekday_name(day),
                events: events.iter().map(EventView::from).collect(),
            })
            .collect(),
    }
}

#[derive(Deserialize)]
pub struct UploadParams {
    /// Skip invalid events instead of rejecting the whole file
    #[serde(default)]
    pub lenient: bool,
}

/// Skipped-event info returned for lenient uploads
#[derive(Serialize)]
pub struct SkippedView {
    pub position: usize,
    pub name: String,
    pub reason: String,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub loaded: usize,
    pub skipped: Vec<SkippedView>,
}

/// PUT /schedule - Replace the schedule with the uploaded ICS payload
///
/// On any failure the previously loaded schedule stays visible.
async fn upload_schedule(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: String,
) -> Result<Json<UploadResponse>, AppError> {
    let mode = if params.lenient {
        IngestMode::Lenient
    } else {
        IngestMode::Strict
    };

    let report = ingest_ics(&state.store, &body, mode)?;

    Ok(Json(UploadResponse {
        loaded: report.loaded,
        skipped: report
            .skipped
            .into_iter()
            .map(|s| SkippedView {
                position: s.position,
                name: s.name,
                reason: s.reason.to_string(),
            })
            .collect(),
    }))
}

/// GET /schedule - The full week in Monday-first order
async fn get_schedule(State(state): State<AppState>) -> Json<ScheduleView> {
    let schedule = state.store.snapshot();
    Json(schedule_view(&schedule))
}

/// GET /schedule/:day - One weekday's ordered events
async fn get_day(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Json<Vec<EventView>>, AppError> {
    let weekday = Weekday::from_str(&day)
        .map_err(|_| AppError::BadRequest(format!("Unrecognized weekday: {}", day)))?;

    let schedule = state.store.snapshot();
    let events: Vec<EventView> = schedule.get(weekday).iter().map(EventView::from).collect();

    Ok(Json(events))
}
