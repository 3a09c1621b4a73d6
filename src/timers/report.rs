//! Reporting snapshots
//!
//! A [`TimerReport`] is a point-in-time view of a registry, suitable for
//! serialization into logs or profiling output. Capturing one is a pure
//! read: running timers keep running and their records are untouched.

use serde::{Deserialize, Serialize};

use super::TimerRegistry;

/// Snapshot of a single timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSummary {
    pub name: String,

    /// ISO 8601 formatted start time (wall clock)
    pub started_at: String,

    /// Whether the timer was still running when the report was captured
    pub running: bool,

    /// Elapsed (running) or final (stopped) duration in seconds
    pub elapsed_seconds: f64,
}

/// Snapshot of every timer in a registry, ordered by start time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimerReport {
    pub timers: Vec<TimerSummary>,
}

impl TimerReport {
    pub(super) fn capture(registry: &TimerRegistry) -> Self {
        let mut entries: Vec<_> = registry.iter().collect();
        // Monotonic start as the primary key; name breaks same-instant ties
        entries.sort_by_key(|(name, record)| (record.started_instant(), *name));

        let timers = entries
            .into_iter()
            .map(|(name, record)| TimerSummary {
                name: name.to_string(),
                started_at: record.started_at().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
                running: !record.is_stopped(),
                elapsed_seconds: record.elapsed().as_secs_f64(),
            })
            .collect();

        Self { timers }
    }

    /// Look up a summary by timer name
    pub fn get(&self, name: &str) -> Option<&TimerSummary> {
        self.timers.iter().find(|summary| summary.name == name)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
