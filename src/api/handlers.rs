//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::{engine::TimerConfiguration, presets::TimerPreset, state::AppState};

use super::responses::{
    CommandResponse, HealthResponse, PresetBody, StatusResponse, TimerConfigurationBody,
};

/// Handle POST /configure - Apply a new timer configuration
pub async fn configure_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TimerConfigurationBody>,
) -> Result<Json<CommandResponse>, StatusCode> {
    let base = match state.engine_state() {
        Ok((config, _)) => config,
        Err(e) => {
            error!("Failed to read current configuration: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let config = body.merge_into(base);
    match state.configure(config) {
        Ok(snapshot) => {
            info!("Configure endpoint called - timer reconfigured and reset");
            Ok(Json(CommandResponse::ok(
                "Timer configured".to_string(),
                snapshot,
            )))
        }
        Err(e) => {
            error!("Failed to configure timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start - Start the countdown
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CommandResponse>, StatusCode> {
    match state.start() {
        Ok(snapshot) => Ok(Json(CommandResponse::ok(
            "Timer started".to_string(),
            snapshot,
        ))),
        Err(e) => {
            error!("Failed to start timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /pause - Pause the countdown
pub async fn pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CommandResponse>, StatusCode> {
    match state.pause() {
        Ok(snapshot) => Ok(Json(CommandResponse::ok(
            "Timer paused".to_string(),
            snapshot,
        ))),
        Err(e) => {
            error!("Failed to pause timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /reset - Reset to the initial state
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CommandResponse>, StatusCode> {
    match state.reset() {
        Ok(snapshot) => Ok(Json(CommandResponse::ok(
            "Timer reset".to_string(),
            snapshot,
        ))),
        Err(e) => {
            error!("Failed to reset timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /tick - Apply one tick from an external driver.
///
/// A tick while paused or finished is a no-op, not an error.
pub async fn tick_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CommandResponse>, StatusCode> {
    match state.apply_tick() {
        Ok(Some((snapshot, _))) => Ok(Json(CommandResponse::ok(
            "Tick applied".to_string(),
            snapshot,
        ))),
        Ok(None) => match state.snapshot() {
            Ok(snapshot) => Ok(Json(CommandResponse::ok(
                "Timer not running, tick ignored".to_string(),
                snapshot,
            ))),
            Err(e) => {
                error!("Failed to read timer state: {}", e);
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            }
        },
        Err(e) => {
            error!("Failed to apply tick: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return the full timer status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let snapshot = match state.snapshot() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get snapshot: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (config, run) = match state.engine_state() {
        Ok(pair) => pair,
        Err(e) => {
            error!("Failed to get engine state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        snapshot,
        run,
        config,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Handle GET /presets - List all stored presets
pub async fn list_presets_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TimerPreset>>, StatusCode> {
    match state.presets.list() {
        Ok(presets) => Ok(Json(presets)),
        Err(e) => {
            error!("Failed to list presets: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /presets - Create a new named preset
pub async fn create_preset_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PresetBody>,
) -> Result<(StatusCode, Json<TimerPreset>), StatusCode> {
    let config = body.config.merge_into(TimerConfiguration::default());
    match state.presets.create(body.name, config) {
        Ok(preset) => Ok((StatusCode::CREATED, Json(preset))),
        Err(e) => {
            error!("Failed to create preset: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle PUT /presets/:id - Update an existing preset
pub async fn update_preset_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<PresetBody>,
) -> Result<Json<TimerPreset>, StatusCode> {
    let base = match state.presets.get(id) {
        Ok(Some(preset)) => preset.config,
        Ok(None) => return Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to look up preset {}: {}", id, e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let config = body.config.merge_into(base);
    match state.presets.update(id, body.name, config) {
        Ok(Some(preset)) => Ok(Json(preset)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to update preset {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle DELETE /presets/:id - Delete a preset
pub async fn delete_preset_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    match state.presets.delete(id) {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to delete preset {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /presets/:id/apply - Configure the engine from a preset
pub async fn apply_preset_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CommandResponse>, StatusCode> {
    let preset = match state.presets.get(id) {
        Ok(Some(preset)) => preset,
        Ok(None) => return Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to look up preset {}: {}", id, e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match state.configure(preset.config) {
        Ok(snapshot) => {
            info!("Applied preset '{}' ({})", preset.name, preset.id);
            Ok(Json(CommandResponse::ok(
                format!("Preset '{}' applied", preset.name),
                snapshot,
            )))
        }
        Err(e) => {
            error!("Failed to apply preset {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
