//! Host settings
//!
//! Read from a JSON file by the headless runner. Missing fields take their
//! defaults; a missing or malformed file falls back to defaults entirely.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Nominal player sprite size (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSize {
    pub width: i32,
    pub height: i32,
}

impl Default for SpriteSize {
    fn default() -> Self {
        Self {
            width: 98,
            height: 98,
        }
    }
}

/// Host settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; `None` seeds from the wall clock at startup
    pub seed: Option<u64>,
    /// Tick cadence the host drives the simulation at
    pub ticks_per_second: u32,
    /// Stop the headless run after this many ticks
    pub max_ticks: u64,
    /// Sleep between ticks to hold the cadence in real time
    pub realtime: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    /// Size of the player sprite the host will draw
    pub player_sprite: SpriteSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            ticks_per_second: 60,
            max_ticks: 3600,
            realtime: false,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            player_sprite: SpriteSize::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Tick length for real-time pacing
    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}
