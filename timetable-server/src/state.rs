use std::sync::Arc;

use timetable_core::ScheduleStore;

/// Shared application state.
///
/// The store is the single process-wide owner of the schedule: uploads
/// replace it atomically, readers take snapshots. Nothing persists across
/// restarts.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<ScheduleStore>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: Arc::new(ScheduleStore::new()),
        }
    }
}
