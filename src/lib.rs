pub mod timers;

pub use timers::shared;
pub use timers::{TimerError, TimerRecord, TimerRegistry, TimerReport, TimerSummary};
