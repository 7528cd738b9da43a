//! Application state.

use std::sync::Arc;
use std::time::Instant;

use carlot_store::CarStore;

/// Application state shared across handlers.
///
/// The storage handle is opened once at startup and injected here; it is
/// never reopened or closed in the serving path.
pub struct AppState {
    pub store: Arc<CarStore>,
    start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<CarStore>) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }

    /// Get uptime.
    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }
}
