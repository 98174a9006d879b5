//! Diagnostic hooks run after a snapshot is decoded.

use crate::types::SimulationSnapshot;
use ev_core::in_hours;
use tracing::{debug, info, warn};

/// Receives every successfully decoded snapshot.
///
/// Observers return nothing, so they cannot steer decoding.
pub trait SnapshotObserver {
    fn on_snapshot(&self, snapshot: &SimulationSnapshot);
}

impl<F> SnapshotObserver for F
where
    F: Fn(&SimulationSnapshot),
{
    fn on_snapshot(&self, snapshot: &SimulationSnapshot) {
        self(snapshot)
    }
}

/// `"Days: <n>"`, or `None` when the report had no `hoursElapsed`.
pub fn day_count_line(snapshot: &SimulationSnapshot) -> Option<String> {
    snapshot.days_elapsed().map(|days| format!("Days: {days}"))
}

/// Logs the snapshot and its day count through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SnapshotObserver for LogObserver {
    fn on_snapshot(&self, snapshot: &SimulationSnapshot) {
        debug!(snapshot = %snapshot.to_json_value(), "simulation state reported");
        match day_count_line(snapshot) {
            Some(line) => info!(hours = snapshot.elapsed().map(in_hours), "{line}"),
            None => warn!("state report has no hoursElapsed; day count unavailable"),
        }
    }
}
