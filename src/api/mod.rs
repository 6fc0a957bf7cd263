//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and the request and
//! response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Timer commands
        .route("/configure", post(configure_handler))
        .route("/start", post(start_handler))
        .route("/pause", post(pause_handler))
        .route("/reset", post(reset_handler))
        .route("/tick", post(tick_handler))
        // Preset CRUD
        .route("/presets", get(list_presets_handler).post(create_preset_handler))
        .route(
            "/presets/:id",
            put(update_preset_handler).delete(delete_preset_handler),
        )
        .route("/presets/:id/apply", post(apply_preset_handler))
        // Introspection
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
