//! The registry mapping timer names to records

use std::time::Duration;

use hashbrown::HashMap;

use super::{TimerError, TimerRecord, TimerReport};

/// In-memory mapping from timer name to its record.
///
/// Names are case-sensitive and unique. Misuse (starting a name twice,
/// stopping an absent or already-stopped timer) fails with a [`TimerError`]
/// and leaves the registry untouched. Queries never mutate state.
///
/// One registry is intended to cover one logical unit of work (a request, a
/// script run). Construct instances freely; the [`shared`](super::shared)
/// module holds a single process-wide default for call sites that cannot
/// thread an instance through.
#[derive(Debug, Clone, Default)]
pub struct TimerRegistry {
    timers: HashMap<String, TimerRecord>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Lifecycle ---

    /// Start a timer under `name`.
    ///
    /// Fails with [`TimerError::AlreadyStarted`] if the name is present,
    /// whether running or stopped.
    pub fn start(&mut self, name: &str) -> Result<(), TimerError> {
        if self.timers.contains_key(name) {
            return Err(TimerError::AlreadyStarted {
                name: name.to_string(),
            });
        }

        tracing::debug!(name, "Timer started");
        self.timers.insert(name.to_string(), TimerRecord::started_now());
        Ok(())
    }

    /// Stop a running timer, setting its end and duration.
    /// Returns the measured duration.
    ///
    /// Fails with [`TimerError::InvalidTimer`] if the name is absent and
    /// [`TimerError::AlreadyStopped`] if the timer was already finalized.
    pub fn stop(&mut self, name: &str) -> Result<Duration, TimerError> {
        let record = self
            .timers
            .get_mut(name)
            .ok_or_else(|| TimerError::InvalidTimer {
                name: name.to_string(),
            })?;

        if record.is_stopped() {
            return Err(TimerError::AlreadyStopped {
                name: name.to_string(),
            });
        }

        let duration = record.finalize();
        tracing::debug!(name, ?duration, "Timer stopped");
        Ok(duration)
    }

    /// Finalize every running timer, each with its own end snapshot.
    /// Already-stopped records keep their original end, so calling this
    /// twice changes nothing.
    pub fn stop_all(&mut self) {
        for record in self.timers.values_mut() {
            record.finalize();
        }
    }

    /// Time a closure under `name`: start, run it, stop.
    /// Returns the closure's value; fails like `start` would if the name is
    /// already present.
    pub fn time<F, R>(&mut self, name: &str, f: F) -> Result<R, TimerError>
    where
        F: FnOnce() -> R,
    {
        self.start(name)?;
        let result = f();
        self.stop(name)?;
        Ok(result)
    }

    // --- Queries ---

    /// Elapsed time for `name`: live while running, frozen once stopped.
    ///
    /// Fails with [`TimerError::InvalidTimer`] if the name is absent.
    /// Never mutates the record.
    pub fn elapsed(&self, name: &str) -> Result<Duration, TimerError> {
        self.timers
            .get(name)
            .map(TimerRecord::elapsed)
            .ok_or_else(|| TimerError::InvalidTimer {
                name: name.to_string(),
            })
    }

    /// Get the full record for `name`, or `None` if unknown
    pub fn get(&self, name: &str) -> Option<&TimerRecord> {
        self.timers.get(name)
    }

    /// Whether a timer exists under `name`
    pub fn has(&self, name: &str) -> bool {
        self.timers.contains_key(name)
    }

    /// Whether the timer under `name` has been finalized.
    ///
    /// Fails with [`TimerError::InvalidTimer`] if the name is absent.
    pub fn is_stopped(&self, name: &str) -> Result<bool, TimerError> {
        self.timers
            .get(name)
            .map(TimerRecord::is_stopped)
            .ok_or_else(|| TimerError::InvalidTimer {
                name: name.to_string(),
            })
    }

    /// Iterate over all entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TimerRecord)> {
        self.timers.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Number of tracked timers (running and stopped)
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Snapshot of every entry for reporting, ordered by start time.
    /// A pure read: running timers stay running.
    pub fn report(&self) -> TimerReport {
        TimerReport::capture(self)
    }

    // --- Removal ---

    /// Remove and return the record under `name`.
    ///
    /// Fails with [`TimerError::InvalidTimer`] if the name is absent.
    pub fn remove(&mut self, name: &str) -> Result<TimerRecord, TimerError> {
        self.timers
            .remove(name)
            .ok_or_else(|| TimerError::InvalidTimer {
                name: name.to_string(),
            })
    }

    /// Forget every timer
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}
