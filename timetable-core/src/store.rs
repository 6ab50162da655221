//! Process-wide owner of the current schedule.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::event::ClassEvent;
use crate::schedule::WeeklySchedule;

/// Shared handle to the currently loaded schedule.
///
/// Replacement is copy-and-swap: the new `WeeklySchedule` is built outside
/// the lock and swapped in as a whole, so readers observe either the fully-old
/// or the fully-new schedule, never a mix. Readers hold the lock only long
/// enough to clone the `Arc` and never block each other.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    current: RwLock<Arc<WeeklySchedule>>,
}

impl ScheduleStore {
    /// Create a store holding an empty schedule.
    pub fn new() -> Self {
        ScheduleStore {
            current: RwLock::new(Arc::new(WeeklySchedule::empty())),
        }
    }

    /// Atomically replace the whole schedule with a new batch of events.
    ///
    /// Old buckets are discarded in full, never merged. An empty batch is
    /// valid and yields an empty schedule.
    pub fn replace_all(&self, events: Vec<ClassEvent>) {
        let next = Arc::new(WeeklySchedule::from_events(events));
        *self.current.write() = next;
    }

    /// A consistent snapshot of the current schedule.
    ///
    /// The snapshot stays valid (and unchanged) even if `replace_all` runs
    /// after it was taken.
    pub fn snapshot(&self) -> Arc<WeeklySchedule> {
        self.current.read().clone()
    }
}
