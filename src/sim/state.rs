//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]. The presenter
//! only ever sees it by shared reference.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::effects::ActiveEffects;
use super::rng::GameRng;
use crate::consts::*;

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA for vertex buffers
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Logical world extent; entities are generated inside `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        let largest = Self::largest_entity();
        assert!(
            Self::fits(width, height),
            "world {width}x{height} is smaller than the largest entity ({largest})"
        );
        Self { width, height }
    }

    /// Size of the biggest entity any factory can draw
    pub fn largest_entity() -> f32 {
        SQUARE_SIZE.1.max(GEM_SIZE.1).max(POWERUP_SIZE.1) as f32
    }

    /// Every factory must be able to fit its largest entity on screen
    pub fn fits(width: f32, height: f32) -> bool {
        let largest = Self::largest_entity();
        width >= largest && height >= largest
    }

    /// Whether an axis-aligned box lies fully inside the world
    pub fn contains_box(&self, pos: Vec2, size: f32) -> bool {
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x + size <= self.width && pos.y + size <= self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(WORLD_WIDTH, WORLD_HEIGHT)
    }
}

/// Tunable rules a state is simulated with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub bounds: Bounds,
    /// Spawn cadences in ticks
    pub square_interval: u64,
    pub gem_interval: u64,
    pub powerup_interval: u64,
    /// Lifetime of shield and speed effects
    pub effect_duration: Duration,
    /// Distance moved per directional input
    pub player_step: f32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            square_interval: SQUARE_INTERVAL,
            gem_interval: GEM_INTERVAL,
            powerup_interval: POWERUP_INTERVAL,
            effect_duration: EFFECT_DURATION,
            player_step: PLAYER_STEP,
        }
    }
}

/// Player visual state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerLook {
    #[default]
    Normal,
    Shielded,
}

impl PlayerLook {
    pub fn color(self) -> Color {
        match self {
            PlayerLook::Normal => Color::BLUE,
            PlayerLook::Shielded => Color::YELLOW,
        }
    }
}

/// The player's circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    pub look: PlayerLook,
}

impl Player {
    /// Fresh player in the middle of the world
    pub fn new(bounds: &Bounds) -> Self {
        Self {
            pos: bounds.center(),
            radius: PLAYER_RADIUS,
            look: PlayerLook::Normal,
        }
    }
}

/// A falling hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Square {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    /// Fall speed per tick
    pub speed: f32,
    pub color: Color,
}

/// A score pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gem {
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
    /// Points awarded on pickup (1-5)
    pub value: u32,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerupKind {
    /// Shielded look for a while
    Shield,
    /// Grows the player's hitbox for a while
    Speed,
    /// Flat score bonus
    Score,
}

impl PowerupKind {
    pub const ALL: [PowerupKind; 3] = [PowerupKind::Shield, PowerupKind::Speed, PowerupKind::Score];
}

/// A power-up pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Powerup {
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
    pub kind: PowerupKind,
}

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    /// Hit by a square; frozen until restart
    GameOver,
}

/// Things that happened during the last tick, for logging and presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SquareSpawned,
    GemSpawned,
    PowerupSpawned(PowerupKind),
    GemCollected { value: u32 },
    PowerupCollected(PowerupKind),
    EffectExpired(super::effects::EffectKind),
    GameOver { score: u64 },
}

/// Complete game state for one session
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub rules: Rules,
    pub player: Player,
    /// Hazards in spawn order
    pub squares: Vec<Square>,
    /// Gems in spawn order
    pub gems: Vec<Gem>,
    /// Powerups in spawn order
    pub powerups: Vec<Powerup>,
    pub score: u64,
    /// Ticks simulated so far
    pub frame: u64,
    pub phase: GamePhase,
    /// Running timed effects
    pub effects: ActiveEffects,
    #[serde(skip)]
    pub rng: GameRng,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with default rules
    pub fn new(seed: u64) -> Self {
        Self::with_rules(Rules::default(), seed)
    }

    pub fn with_rules(rules: Rules, seed: u64) -> Self {
        assert!(rules.player_step > 0.0, "player step must be positive");
        assert!(
            rules.square_interval > 0 && rules.gem_interval > 0 && rules.powerup_interval > 0,
            "spawn intervals must be positive"
        );
        Self {
            player: Player::new(&rules.bounds),
            rules,
            squares: Vec::new(),
            gems: Vec::new(),
            powerups: Vec::new(),
            score: 0,
            frame: 0,
            phase: GamePhase::Active,
            effects: ActiveEffects::default(),
            rng: GameRng::new(seed),
            events: Vec::new(),
        }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.rules.bounds
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Add points (never subtracts, so score is monotonic)
    pub fn award(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }
}
