//! Interval Timer - A state-managed HTTP server for interval workout timers
//!
//! This library provides an interval timer engine (prep/work/rest phases
//! across cycles and sets), a preset persistence layer, and an HTTP API
//! for driving and observing the timer.

pub mod api;
pub mod config;
pub mod engine;
pub mod presets;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use engine::{TickSnapshot, TimerConfiguration, TimerEngine, TimerRunState};
pub use presets::{PresetStore, TimerPreset};
pub use state::AppState;
pub use utils::signals::shutdown_signal;
