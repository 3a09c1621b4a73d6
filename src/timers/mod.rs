//! Named timer registry
//!
//! This module provides:
//! - **Records**: Start/end timestamps and the derived duration for one named span
//! - **Registry**: The mapping from names to records, plus lifecycle operations
//! - **Shared registry**: A process-wide default instance for call sites that
//!   cannot thread a registry through explicitly
//! - **Reports**: Serializable snapshots for exporting duration statistics
//!
//! # Lifecycle
//!
//! Each name moves through `absent → running → stopped`. Starting an existing
//! name, or stopping an absent or already-stopped one, is an error and leaves
//! the registry untouched. Queries never mutate state.

mod error;
mod record;
mod registry;
mod report;

pub mod shared;


pub use error::TimerError;
pub use record::TimerRecord;
pub use registry::TimerRegistry;
pub use report::{TimerReport, TimerSummary};
