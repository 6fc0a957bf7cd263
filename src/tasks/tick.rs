//! Countdown background task

use std::{sync::Arc, time::Duration};

use tokio::time::interval;
use tracing::{debug, error, info};

use crate::state::AppState;

/// Background task that drives the timer engine at 1 Hz.
///
/// Each tick locks the engine, applies the decrement if the timer is
/// running and publishes the fresh snapshot on the watch channel. A tick
/// while paused is skipped entirely; there is no catch-up for missed
/// ticks, so a delayed interval simply shows up as a slower countdown.
pub async fn countdown_task(state: Arc<AppState>) {
    info!("Starting countdown task");

    let mut interval = interval(Duration::from_secs(1));

    loop {
        interval.tick().await;

        match state.apply_tick() {
            Ok(Some((snapshot, phase_changed))) => {
                if phase_changed {
                    info!(
                        "Phase changed to {} ({}), {} remaining",
                        snapshot.phase_display_name, snapshot.progress_text, snapshot.formatted_time
                    );
                }
                if snapshot.is_finished {
                    info!("Workout finished");
                }
            }
            Ok(None) => {
                // Timer paused or idle, nothing to do
                debug!("Tick skipped, timer not running");
            }
            Err(e) => {
                error!("Failed to apply countdown tick: {}", e);
            }
        }
    }
}
