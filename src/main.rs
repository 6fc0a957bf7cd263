//! Interval Timer - A state-managed HTTP server for interval workout timers
//!
//! This is the main entry point for the interval-timer application.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use interval_timer::{
    api::create_router,
    config::Config,
    engine::TimerConfiguration,
    presets::PresetStore,
    state::AppState,
    tasks::countdown_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "interval_timer={},tower_http=info",
            config.log_level()
        ))
        .init();

    info!("Starting interval-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, data_dir={}",
        config.host,
        config.port,
        config.data_dir.display()
    );

    // Open the preset store and pick up the last-used settings
    let presets = Arc::new(PresetStore::open(&config.data_dir)?);
    let initial_config = match presets.last_used() {
        Ok(Some(saved)) => {
            info!("Restoring last-used timer settings");
            saved
        }
        Ok(None) => TimerConfiguration::default(),
        Err(e) => {
            warn!("Failed to load last-used settings: {}", e);
            TimerConfiguration::default()
        }
    };

    // Create application state
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        initial_config,
        presets,
    ));

    // Start the 1 Hz countdown background task
    let tick_state = Arc::clone(&state);
    tokio::spawn(async move {
        countdown_task(tick_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /configure          - Apply a new timer configuration");
    info!("  POST /start              - Start the countdown");
    info!("  POST /pause              - Pause the countdown");
    info!("  POST /reset              - Reset the current run");
    info!("  POST /tick               - Apply one external tick");
    info!("  GET  /presets            - List presets");
    info!("  POST /presets            - Create a preset");
    info!("  PUT  /presets/:id        - Update a preset");
    info!("  DEL  /presets/:id        - Delete a preset");
    info!("  POST /presets/:id/apply  - Configure from a preset");
    info!("  GET  /status             - Check current status and timer");
    info!("  GET  /health             - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
