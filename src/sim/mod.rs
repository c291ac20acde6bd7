//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame
//! - Seeded RNG only
//! - Stable iteration order (insertion order of each collection)
//! - Timed effects read an injected clock, never the system time
//! - No rendering or platform dependencies

pub mod collision;
pub mod controller;
pub mod effects;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::touches;
pub use controller::{Direction, move_player};
pub use effects::{ActiveEffects, Clock, EffectKind, ManualClock, SystemClock};
pub use rng::GameRng;
pub use spawn::{spawn_gem, spawn_powerup, spawn_square};
pub use state::{
    Bounds, Color, GameEvent, GamePhase, GameState, Gem, Player, PlayerLook, Powerup, PowerupKind,
    Rules, Square,
};
pub use tick::{SpawnSchedule, apply_powerup, tick};
