//! Workout phase enumeration and display mapping

use serde::{Deserialize, Serialize};

/// One named stage of a workout interval.
///
/// `Done` is terminal: only `configure` or `reset` on the engine can leave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Preparation countdown before the first work interval
    Prep,
    /// Active work interval
    Work,
    /// Short rest between cycles within a set
    Rest,
    /// Longer rest between sets
    RestSet,
    /// Workout finished
    Done,
}

impl Phase {
    /// Human-readable name shown during the phase
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Prep => "Get Ready",
            Phase::Work => "Work",
            Phase::Rest => "Rest",
            Phase::RestSet => "Set Break",
            Phase::Done => "Finished",
        }
    }

    /// Accent color associated with the phase, as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            Phase::Prep => "#fb8c00",
            Phase::Work => "#e53935",
            Phase::Rest => "#43a047",
            Phase::RestSet => "#1e88e5",
            Phase::Done => "#8e24aa",
        }
    }

    /// Check if this is the terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Done)
    }
}
