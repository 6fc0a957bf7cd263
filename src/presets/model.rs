//! Preset data structures

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::TimerConfiguration;

/// A named, persisted timer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerPreset {
    pub id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub config: TimerConfiguration,
}

impl TimerPreset {
    /// Create a preset with a fresh id
    pub fn new(name: String, config: TimerConfiguration) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            config,
        }
    }
}
