//! Process-wide shared registry
//!
//! One lazily-initialized [`TimerRegistry`] reachable from anywhere in the
//! process. Prefer constructing a registry and passing it explicitly; this
//! module is the single default instance for quick instrumentation where
//! threading one through is impractical.
//!
//! Semantics are identical to the instance API. The registry lives for the
//! process lifetime; [`clear`] resets it for test isolation.

use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use super::{TimerError, TimerRecord, TimerRegistry, TimerReport};

/// Global timer registry, created on first use
static SHARED: LazyLock<RwLock<TimerRegistry>> =
    LazyLock::new(|| RwLock::new(TimerRegistry::new()));

fn read() -> RwLockReadGuard<'static, TimerRegistry> {
    SHARED.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write() -> RwLockWriteGuard<'static, TimerRegistry> {
    SHARED.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Start a timer under `name` in the shared registry
pub fn start(name: &str) -> Result<(), TimerError> {
    write().start(name)
}

/// Stop a running timer; returns the measured duration
pub fn stop(name: &str) -> Result<Duration, TimerError> {
    write().stop(name)
}

/// Finalize every running timer in the shared registry
pub fn stop_all() {
    write().stop_all();
}

/// Time a closure under `name`.
///
/// The lock is released while the closure runs, so timed code may itself
/// use the shared registry.
pub fn time<F, R>(name: &str, f: F) -> Result<R, TimerError>
where
    F: FnOnce() -> R,
{
    start(name)?;
    let result = f();
    stop(name)?;
    Ok(result)
}

/// Elapsed time for `name`: live while running, frozen once stopped
pub fn elapsed(name: &str) -> Result<Duration, TimerError> {
    read().elapsed(name)
}

/// Get a copy of the record under `name`, or `None` if unknown
pub fn get(name: &str) -> Option<TimerRecord> {
    read().get(name).cloned()
}

/// Whether a timer exists under `name`
pub fn has(name: &str) -> bool {
    read().has(name)
}

/// Whether the timer under `name` has been finalized
pub fn is_stopped(name: &str) -> Result<bool, TimerError> {
    read().is_stopped(name)
}

/// Number of timers in the shared registry
pub fn count() -> usize {
    read().len()
}

/// Snapshot of the shared registry, ordered by start time
pub fn report() -> TimerReport {
    read().report()
}

/// Remove and return the record under `name`
pub fn remove(name: &str) -> Result<TimerRecord, TimerError> {
    write().remove(name)
}

/// Forget every timer in the shared registry.
/// Intended for test isolation and unit-of-work boundaries.
pub fn clear() {
    write().clear();
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    // The shared registry is process-global and the test harness runs
    // threads in parallel, so everything touching it lives in this one
    // test and uses names no other test claims.
    #[test]
    fn test_shared_registry_lifecycle() {
        assert!(!super::has("shared.phase"));

        super::start("shared.phase").unwrap();
        assert!(super::has("shared.phase"));
        assert!(!super::is_stopped("shared.phase").unwrap());
        assert!(super::count() >= 1);

        thread::sleep(Duration::from_millis(20));
        let running = super::elapsed("shared.phase").unwrap();
        assert!(running >= Duration::from_millis(20));

        let measured = super::stop("shared.phase").unwrap();
        assert!(measured >= running);
        assert!(super::is_stopped("shared.phase").unwrap());

        let record = super::get("shared.phase").unwrap();
        assert_eq!(record.duration(), Some(measured));

        let value = super::time("shared.work", || 7).unwrap();
        assert_eq!(value, 7);
        assert!(super::is_stopped("shared.work").unwrap());

        let report = super::report();
        assert!(report.get("shared.phase").is_some());
        assert!(report.get("shared.work").is_some());

        let removed = super::remove("shared.phase").unwrap();
        assert_eq!(removed.duration(), Some(measured));
        assert!(!super::has("shared.phase"));

        super::clear();
        assert!(!super::has("shared.work"));
    }
}
