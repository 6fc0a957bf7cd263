//! Interval timer engine
//!
//! The core state machine: a [`TimerConfiguration`] plus a [`TimerRunState`]
//! advanced through deterministic phase transitions by 1-second ticks. The
//! engine performs no I/O; persistence and recording consume the snapshots
//! it publishes.

pub mod config;
pub mod phase;
pub mod run;
pub mod snapshot;

// Re-export main types
pub use config::TimerConfiguration;
pub use phase::Phase;
pub use run::{format_time, TimerEngine, TimerRunState};
pub use snapshot::TickSnapshot;
