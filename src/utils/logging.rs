use log::{Level, log_enabled};
use std::time::Instant;

use super::profiling::UpdateStats;

/// Scoped timer emitting trace-level timings for a section of the step.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Option<Instant>,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        let start = log_enabled!(Level::Trace).then(Instant::now);
        Self { label, start }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if let Some(start) = self.start {
            log::trace!("{} took {} µs", self.label, start.elapsed().as_micros());
        }
    }
}

/// Logs a one-line summary of an `update` call when it did any work.
pub fn log_update_stats(stats: &UpdateStats) {
    if stats.steps == 0 || !log_enabled!(Level::Debug) {
        return;
    }
    log::debug!(
        "update: {} steps, {} pairs tested, {} collisions, {} unsupported pairs",
        stats.steps,
        stats.pairs_tested,
        stats.collisions,
        stats.unsupported_pairs
    );
}
