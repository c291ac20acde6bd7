//! Gem Dodge - A single-screen arcade avoidance game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, effects)
//! - `session`: Session lifecycle, restart and input gating
//! - `renderer`: Presenter seam and scene tessellation
//! - `driver`: Fixed timestep loop tying session and presenter together
//! - `settings`: World bounds and tuning loaded from JSON
//! - `autopilot`: Demo player for headless runs

pub mod autopilot;
pub mod driver;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use driver::Driver;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Nominal tick rate (spawn cadences assume 60 ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 500.0;
    pub const WORLD_HEIGHT: f32 = 500.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 10.0;
    /// Radius while the speed powerup is active (grows the hitbox)
    pub const PLAYER_GROWN_RADIUS: f32 = 15.0;
    /// Distance moved per directional input
    pub const PLAYER_STEP: f32 = 5.0;

    /// Square (hazard) attribute ranges, inclusive
    pub const SQUARE_SIZE: (i32, i32) = (10, 50);
    pub const SQUARE_SPEED: (i32, i32) = (1, 5);

    /// Gem attribute ranges, inclusive
    pub const GEM_SIZE: (i32, i32) = (10, 20);
    pub const GEM_VALUE: (i32, i32) = (1, 5);

    /// Powerup size range, inclusive
    pub const POWERUP_SIZE: (i32, i32) = (10, 20);

    /// Gems and powerups drift down at a fixed rate
    pub const PICKUP_FALL_SPEED: f32 = 1.0;

    /// Spawn cadences in ticks
    pub const SQUARE_INTERVAL: u64 = 60;
    pub const GEM_INTERVAL: u64 = 600;
    pub const POWERUP_INTERVAL: u64 = 900;

    /// How long shield and speed powerups last (clock time, not ticks)
    pub const EFFECT_DURATION: Duration = Duration::from_secs(5);
    /// Flat bonus from the score powerup
    pub const SCORE_POWERUP_BONUS: u64 = 10;
}
