//! Error types for timer operations

use thiserror::Error;

/// Errors from registry operations.
///
/// Every failure is local to the operation that produced it; the registry's
/// state is unchanged when any of these is returned.
#[derive(Debug, Error)]
pub enum TimerError {
    /// The named timer is not in the registry
    #[error("invalid timer: {name}")]
    InvalidTimer { name: String },

    /// `start` was called for a name that already exists
    #[error("timer already started: {name}")]
    AlreadyStarted { name: String },

    /// `stop` was called for a timer that was already finalized
    #[error("timer already stopped: {name}")]
    AlreadyStopped { name: String },
}

impl TimerError {
    /// The timer name the failed operation referenced
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidTimer { name }
            | Self::AlreadyStarted { name }
            | Self::AlreadyStopped { name } => name,
        }
    }
}
