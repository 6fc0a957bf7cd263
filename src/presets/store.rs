//! File-backed preset storage

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::TimerConfiguration;

use super::TimerPreset;

/// On-disk shape of the preset file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PresetFile {
    presets: Vec<TimerPreset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_used: Option<TimerConfiguration>,
}

/// Store for named presets and last-used settings, backed by a single
/// JSON file.
///
/// All mutations rewrite the whole file through a temp-file-then-rename so
/// a crash mid-write cannot leave a truncated file behind. The store is
/// safe to share behind an `Arc`; a mutex serializes writers.
#[derive(Debug)]
pub struct PresetStore {
    path: PathBuf,
    data: Mutex<PresetFile>,
}

impl PresetStore {
    /// Open (or initialize) the store at `data_dir/presets.json`.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join("presets.json");

        let data = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preset file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse preset file {}", path.display()))?
        } else {
            info!("No preset file at {}, starting empty", path.display());
            PresetFile::default()
        };

        Ok(Self {
            path,
            data: Mutex::new(data),
        })
    }

    /// List all stored presets
    pub fn list(&self) -> Result<Vec<TimerPreset>> {
        let data = self.lock()?;
        Ok(data.presets.clone())
    }

    /// Look up a preset by id
    pub fn get(&self, id: Uuid) -> Result<Option<TimerPreset>> {
        let data = self.lock()?;
        Ok(data.presets.iter().find(|p| p.id == id).cloned())
    }

    /// Create a new named preset and persist it
    pub fn create(&self, name: String, config: TimerConfiguration) -> Result<TimerPreset> {
        let mut data = self.lock()?;
        let preset = TimerPreset::new(name, config);
        data.presets.push(preset.clone());
        self.persist(&data)?;
        info!("Created preset '{}' ({})", preset.name, preset.id);
        Ok(preset)
    }

    /// Update an existing preset in place. Returns the updated preset, or
    /// `None` if the id is unknown.
    pub fn update(
        &self,
        id: Uuid,
        name: String,
        config: TimerConfiguration,
    ) -> Result<Option<TimerPreset>> {
        let mut data = self.lock()?;
        let Some(preset) = data.presets.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        preset.name = name;
        preset.config = config;
        let updated = preset.clone();
        self.persist(&data)?;
        Ok(Some(updated))
    }

    /// Delete a preset. Returns true if one was removed.
    pub fn delete(&self, id: Uuid) -> Result<bool> {
        let mut data = self.lock()?;
        let before = data.presets.len();
        data.presets.retain(|p| p.id != id);
        if data.presets.len() == before {
            return Ok(false);
        }
        self.persist(&data)?;
        info!("Deleted preset {}", id);
        Ok(true)
    }

    /// Last configuration the engine was configured with, if any
    pub fn last_used(&self) -> Result<Option<TimerConfiguration>> {
        let data = self.lock()?;
        Ok(data.last_used.clone())
    }

    /// Record the most recently applied configuration
    pub fn set_last_used(&self, config: TimerConfiguration) -> Result<()> {
        let mut data = self.lock()?;
        data.last_used = Some(config);
        self.persist(&data)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, PresetFile>> {
        self.data
            .lock()
            .map_err(|e| anyhow!("Preset store lock poisoned: {}", e))
    }

    fn persist(&self, data: &PresetFile) -> Result<()> {
        let raw = serde_json::to_string_pretty(data).context("Failed to serialize presets")?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)
            .with_context(|| format!("Failed to write preset file {}", tmp.display()))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            warn!("Failed to move preset file into place: {}", e);
            return Err(e).with_context(|| {
                format!("Failed to replace preset file {}", self.path.display())
            });
        }
        Ok(())
    }
}
