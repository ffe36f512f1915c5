use scoreboard_core::tracker::Tracker;
use tokio::sync::Mutex;

/// Requests take the tracker lock for their whole read-modify-write, so the
/// two tables are only ever touched by one request at a time.
pub struct AppState {
    pub tracker: Mutex<Tracker>,
}

impl AppState {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Mutex::new(tracker),
        }
    }
}
