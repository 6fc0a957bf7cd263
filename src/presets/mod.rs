//! Preset persistence module
//!
//! Named timer configurations and last-used settings, stored in a local
//! JSON file. Strictly downstream of the engine: store failures are
//! reported to the caller but never touch the live run state.

pub mod model;
pub mod store;

// Re-export main types
pub use model::TimerPreset;
pub use store::PresetStore;
