//! Per-tick state snapshot published to downstream consumers

use serde::{Deserialize, Serialize};

use super::Phase;

/// Snapshot of the engine state published after every command and tick.
///
/// This is the whole contract between the engine and its downstream
/// consumers: the recording collaborator burns `formatted_time`,
/// `progress_text` and the progress ring derived from `progress_ratio`
/// into video frames, and the UI renders the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickSnapshot {
    /// Current phase
    pub phase: Phase,
    /// Display name for the current phase
    pub phase_display_name: String,
    /// Accent color for the current phase, hex
    pub phase_color: String,
    /// Countdown as zero-padded `MM:SS`
    pub formatted_time: String,
    /// Cycle/set progress line, e.g. `"2/10 • Set 1"`
    pub progress_text: String,
    /// Elapsed fraction of the current phase, 0.0 to 1.0
    pub progress_ratio: f64,
    /// Whether the countdown is currently being driven
    pub running: bool,
    /// True once the run has completed
    pub is_finished: bool,
}
