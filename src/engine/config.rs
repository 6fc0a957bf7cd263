//! Timer configuration structure and validation

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Immutable-per-run timer configuration.
///
/// Durations are in whole seconds. Validation is by clamping rather than
/// rejection: `clamped()` raises `cycles` and `sets` to at least 1 so the
/// phase transition table always makes progress. The engine applies this
/// at every `configure` call, so a stored configuration is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerConfiguration {
    /// Preparation countdown before the first work interval
    pub prep: u32,
    /// Work interval duration
    pub work: u32,
    /// Rest duration between cycles within a set
    pub rest: u32,
    /// Rest duration between sets
    pub rest_between_sets: u32,
    /// Number of work/rest repetitions per set
    pub cycles: u32,
    /// Number of repetitions of the cycle block
    pub sets: u32,
    /// Optional label shown during work phases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc_work: Option<String>,
    /// Optional label shown during rest phases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc_rest: Option<String>,
}

impl TimerConfiguration {
    /// Return a copy with `cycles` and `sets` clamped to at least 1.
    ///
    /// A zero cycle or set count would make the transition table skip
    /// straight past the work phases, so it is treated as a configuration
    /// mistake and clamped rather than rejected.
    pub fn clamped(mut self) -> Self {
        if self.cycles == 0 {
            warn!("Timer configuration has cycles=0, clamping to 1");
            self.cycles = 1;
        }
        if self.sets == 0 {
            warn!("Timer configuration has sets=0, clamping to 1");
            self.sets = 1;
        }
        self
    }
}

impl Default for TimerConfiguration {
    fn default() -> Self {
        Self {
            prep: 5,
            work: 60,
            rest: 20,
            rest_between_sets: 120,
            cycles: 10,
            sets: 1,
            desc_work: None,
            desc_rest: None,
        }
    }
}
