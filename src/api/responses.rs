//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{TickSnapshot, TimerConfiguration, TimerRunState};

/// Partial timer configuration accepted by the configure and preset
/// endpoints. Absent fields keep their current (or default) values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerConfigurationBody {
    pub prep: Option<u32>,
    pub work: Option<u32>,
    pub rest: Option<u32>,
    pub rest_between_sets: Option<u32>,
    pub cycles: Option<u32>,
    pub sets: Option<u32>,
    pub desc_work: Option<String>,
    pub desc_rest: Option<String>,
}

impl TimerConfigurationBody {
    /// Merge the supplied fields over a base configuration
    pub fn merge_into(self, base: TimerConfiguration) -> TimerConfiguration {
        TimerConfiguration {
            prep: self.prep.unwrap_or(base.prep),
            work: self.work.unwrap_or(base.work),
            rest: self.rest.unwrap_or(base.rest),
            rest_between_sets: self.rest_between_sets.unwrap_or(base.rest_between_sets),
            cycles: self.cycles.unwrap_or(base.cycles),
            sets: self.sets.unwrap_or(base.sets),
            desc_work: self.desc_work.or(base.desc_work),
            desc_rest: self.desc_rest.or(base.desc_rest),
        }
    }
}

/// Request body for creating or updating a preset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetBody {
    pub name: String,
    #[serde(flatten)]
    pub config: TimerConfigurationBody,
}

/// API response structure for timer command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub snapshot: TickSnapshot,
}

impl CommandResponse {
    /// Create a new command response
    pub fn new(status: String, message: String, snapshot: TickSnapshot) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            snapshot,
        }
    }

    /// Create a success response
    pub fn ok(message: String, snapshot: TickSnapshot) -> Self {
        Self::new("ok".to_string(), message, snapshot)
    }

    /// Create an error response
    pub fn error(message: String, snapshot: TickSnapshot) -> Self {
        Self::new("error".to_string(), message, snapshot)
    }
}

/// Full status response with configuration and run state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub snapshot: TickSnapshot,
    pub run: TimerRunState,
    pub config: TimerConfiguration,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_base_values_for_absent_fields() {
        let base = TimerConfiguration::default();
        let body = TimerConfigurationBody {
            work: Some(45),
            cycles: Some(6),
            ..Default::default()
        };

        let merged = body.merge_into(base.clone());
        assert_eq!(merged.work, 45);
        assert_eq!(merged.cycles, 6);
        assert_eq!(merged.prep, base.prep);
        assert_eq!(merged.rest_between_sets, base.rest_between_sets);
    }

    #[test]
    fn preset_body_flattens_configuration_fields() {
        let body: PresetBody =
            serde_json::from_str(r#"{"name":"Tabata","work":20,"rest":10,"cycles":8}"#).unwrap();

        assert_eq!(body.name, "Tabata");
        assert_eq!(body.config.work, Some(20));
        assert_eq!(body.config.rest, Some(10));
        assert_eq!(body.config.cycles, Some(8));
        assert_eq!(body.config.prep, None);
    }
}
