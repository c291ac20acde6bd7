//! Game settings
//!
//! World bounds and gameplay tuning, loaded from an optional JSON file.
//! Every field has a default reproducing the classic 500x500 game.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Bounds, Rules};

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// Logical world width
    pub width: f32,
    /// Logical world height
    pub height: f32,

    // === Simulation ===
    /// Base RNG seed; restarts derive their seeds from it
    pub seed: u64,
    /// Ticks per second the driver runs at
    pub tick_rate: u32,
    /// Spawn cadences in ticks
    pub square_interval: u64,
    pub gem_interval: u64,
    pub powerup_interval: u64,
    /// Shield and speed powerup lifetime in milliseconds
    pub effect_duration_ms: u64,
    /// Distance moved per key press
    pub player_step: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,

            seed: 0x5eed,
            tick_rate: TICK_RATE,
            square_interval: SQUARE_INTERVAL,
            gem_interval: GEM_INTERVAL,
            powerup_interval: POWERUP_INTERVAL,
            effect_duration_ms: EFFECT_DURATION.as_millis() as u64,
            player_step: PLAYER_STEP,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Check the values a game state cannot be built from
    pub fn validate(&self) -> Result<(), String> {
        if !Bounds::fits(self.width, self.height) {
            return Err(format!(
                "world {}x{} is smaller than the largest entity ({})",
                self.width,
                self.height,
                Bounds::largest_entity()
            ));
        }
        if self.tick_rate == 0 {
            return Err("tick_rate must be positive".to_string());
        }
        if self.square_interval == 0 || self.gem_interval == 0 || self.powerup_interval == 0 {
            return Err("spawn intervals must be positive".to_string());
        }
        // Also rejects NaN
        if !(self.player_step > 0.0) {
            return Err(format!("player_step must be positive, got {}", self.player_step));
        }
        Ok(())
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => match settings.validate() {
                    Ok(()) => {
                        log::info!("Loaded settings from {}", path.display());
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring invalid settings in {}: {e}", path.display()),
                },
                Err(e) => log::warn!("Ignoring malformed settings in {}: {e}", path.display()),
            },
            Err(e) => log::warn!("Could not read settings from {}: {e}", path.display()),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Fixed simulation timestep
    pub fn sim_dt(&self) -> f32 {
        assert!(self.tick_rate > 0, "tick rate must be positive");
        1.0 / self.tick_rate as f32
    }

    /// Simulation rules for a new game state
    pub fn rules(&self) -> Rules {
        Rules {
            bounds: Bounds::new(self.width, self.height),
            square_interval: self.square_interval,
            gem_interval: self.gem_interval,
            powerup_interval: self.powerup_interval,
            effect_duration: Duration::from_millis(self.effect_duration_ms),
            player_step: self.player_step,
        }
    }
}
