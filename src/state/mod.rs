//! State management module
//!
//! The shared application state: the live timer engine, preset store
//! handle and the snapshot channel.

pub mod app_state;

// Re-export main types
pub use app_state::AppState;
