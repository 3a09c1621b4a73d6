//! Timer records (runtime state)
//!
//! A `TimerRecord` is one named span: timestamps taken when the timer is
//! started and an optional end set exactly once when it stops.
//!
//! # Lifecycle
//!
//! 1. `TimerRegistry::start` creates the record with only the start set
//! 2. `TimerRegistry::stop` (or `stop_all`) finalizes it once
//! 3. The record stays queryable until removed or the registry is cleared

use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime};

/// A single named timer entry
///
/// A stopped record is immutable: once the end is set it never changes, and
/// the end and duration are always set together.
#[derive(Debug, Clone)]
pub struct TimerRecord {
    /// When the timer was started (wall clock, for reporting)
    started_at: NaiveDateTime,

    /// When the timer was started (monotonic, for measurement)
    started_instant: Instant,

    /// When the timer was stopped (monotonic); `None` while running
    ended_instant: Option<Instant>,

    /// Total measured duration; set together with `ended_instant`
    duration: Option<Duration>,
}

impl TimerRecord {
    /// Create a record whose span begins now
    pub(super) fn started_now() -> Self {
        Self {
            started_at: Local::now().naive_local(),
            started_instant: Instant::now(),
            ended_instant: None,
            duration: None,
        }
    }

    /// Wall-clock time the timer was started
    pub fn started_at(&self) -> NaiveDateTime {
        self.started_at
    }

    /// Monotonic instant the timer was started
    pub fn started_instant(&self) -> Instant {
        self.started_instant
    }

    /// Monotonic instant the timer was stopped, if it has been
    pub fn ended_instant(&self) -> Option<Instant> {
        self.ended_instant
    }

    /// Final duration, or `None` while the timer is still running
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Whether the end has been set
    pub fn is_stopped(&self) -> bool {
        self.ended_instant.is_some()
    }

    /// Elapsed time: live `now - start` while running, the frozen duration
    /// once stopped
    pub fn elapsed(&self) -> Duration {
        match self.duration {
            Some(duration) => duration,
            None => self.started_instant.elapsed(),
        }
    }

    /// Finalize the record with an end snapshot taken now.
    /// A record that is already stopped keeps its original end.
    /// Returns the final duration.
    pub(super) fn finalize(&mut self) -> Duration {
        if let Some(duration) = self.duration {
            return duration;
        }

        let ended = Instant::now();
        let duration = ended.duration_since(self.started_instant);
        self.ended_instant = Some(ended);
        self.duration = Some(duration);
        duration
    }
}
