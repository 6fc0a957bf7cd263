//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::{
    engine::{TickSnapshot, TimerConfiguration, TimerEngine, TimerRunState},
    presets::PresetStore,
};

/// Main application state that owns the timer engine and preset store
#[derive(Debug)]
pub struct AppState {
    /// The live interval timer engine; the mutex serializes the HTTP
    /// handlers against the 1 Hz countdown task
    pub engine: Arc<Mutex<TimerEngine>>,
    /// Named preset storage
    pub presets: Arc<PresetStore>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel publishing a fresh snapshot after every command and tick
    pub snapshot_tx: watch::Sender<TickSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _snapshot_rx: watch::Receiver<TickSnapshot>,
}

impl AppState {
    /// Create a new AppState with the given initial configuration
    pub fn new(
        port: u16,
        host: String,
        initial_config: TimerConfiguration,
        presets: Arc<PresetStore>,
    ) -> Self {
        let engine = TimerEngine::new(initial_config);
        let (snapshot_tx, snapshot_rx) = watch::channel(engine.snapshot());

        Self {
            engine: Arc::new(Mutex::new(engine)),
            presets,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Apply a command to the engine and publish the resulting snapshot
    pub fn with_engine<F>(&self, action: &str, command: F) -> Result<TickSnapshot, String>
    where
        F: FnOnce(&mut TimerEngine),
    {
        // Lock the engine and apply the command
        let mut engine = self.engine.lock()
            .map_err(|e| format!("Failed to lock timer engine: {}", e))?;

        command(&mut engine);
        let snapshot = engine.snapshot();
        drop(engine); // Release the lock early

        // Update last action tracking
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        // Notify snapshot watchers (recording collaborator, status readers)
        if let Err(e) = self.snapshot_tx.send(snapshot.clone()) {
            warn!("Failed to publish snapshot: {}", e);
        }

        Ok(snapshot)
    }

    /// Configure the engine with new settings and remember them as
    /// last-used. Hard reset: any in-progress run is discarded.
    pub fn configure(&self, config: TimerConfiguration) -> Result<TickSnapshot, String> {
        info!("Applying new timer configuration: {:?}", config);
        let snapshot = self.with_engine("configure", |engine| {
            engine.configure(config.clone());
        })?;

        // Best effort; a storage failure must not corrupt the run state
        if let Err(e) = self.presets.set_last_used(config) {
            warn!("Failed to record last-used settings: {}", e);
        }

        Ok(snapshot)
    }

    /// Start the countdown
    pub fn start(&self) -> Result<TickSnapshot, String> {
        info!("Starting timer");
        self.with_engine("start", |engine| engine.start())
    }

    /// Pause the countdown
    pub fn pause(&self) -> Result<TickSnapshot, String> {
        info!("Pausing timer");
        self.with_engine("pause", |engine| engine.pause())
    }

    /// Reset to the initial state of the current configuration
    pub fn reset(&self) -> Result<TickSnapshot, String> {
        info!("Resetting timer");
        self.with_engine("reset", |engine| engine.reset())
    }

    /// Apply one countdown tick.
    ///
    /// Returns `None` without publishing when the engine is not running,
    /// otherwise the fresh snapshot and whether the tick crossed a phase
    /// boundary.
    pub fn apply_tick(&self) -> Result<Option<(TickSnapshot, bool)>, String> {
        let mut engine = self.engine.lock()
            .map_err(|e| format!("Failed to lock timer engine: {}", e))?;

        if !engine.run_state().running {
            return Ok(None);
        }

        let phase_changed = engine.tick();
        let snapshot = engine.snapshot();
        drop(engine);

        if let Err(e) = self.snapshot_tx.send(snapshot.clone()) {
            warn!("Failed to publish tick snapshot: {}", e);
        }

        Ok(Some((snapshot, phase_changed)))
    }

    /// Get the current snapshot without mutating anything
    pub fn snapshot(&self) -> Result<TickSnapshot, String> {
        self.engine.lock()
            .map(|engine| engine.snapshot())
            .map_err(|e| format!("Failed to lock timer engine: {}", e))
    }

    /// Get the current configuration and run state
    pub fn engine_state(&self) -> Result<(TimerConfiguration, TimerRunState), String> {
        self.engine.lock()
            .map(|engine| (engine.config().clone(), engine.run_state().clone()))
            .map_err(|e| format!("Failed to lock timer engine: {}", e))
    }

    /// Subscribe to snapshot updates
    pub fn subscribe_snapshots(&self) -> watch::Receiver<TickSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
