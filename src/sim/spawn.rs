//! Entity factories
//!
//! Each factory draws its attributes from the state's RNG and appends the
//! new entity to the matching collection. Positions are drawn so the whole
//! bounding box fits inside the world.

use glam::Vec2;

use super::rng::GameRng;
use super::state::{Bounds, GameEvent, GameState, Gem, Powerup, PowerupKind, Square};
use crate::consts::*;

/// Top-left corner for an entity of `size` that keeps it on screen
fn random_position(rng: &mut GameRng, bounds: &Bounds, size: i32) -> Vec2 {
    let x = rng.random_int(0, bounds.width as i32 - size);
    let y = rng.random_int(0, bounds.height as i32 - size);
    Vec2::new(x as f32, y as f32)
}

/// Spawn a falling square with random size, speed, color and position
pub fn spawn_square(state: &mut GameState) {
    let bounds = state.rules.bounds;
    let rng = &mut state.rng;
    let size = rng.random_int(SQUARE_SIZE.0, SQUARE_SIZE.1);
    let speed = rng.random_int(SQUARE_SPEED.0, SQUARE_SPEED.1);
    let color = rng.random_color();
    let pos = random_position(rng, &bounds, size);
    debug_assert!(bounds.contains_box(pos, size as f32));

    log::debug!("square spawned at {pos} (size {size}, speed {speed})");
    state.squares.push(Square {
        pos,
        size: size as f32,
        speed: speed as f32,
        color,
    });
    state.events.push(GameEvent::SquareSpawned);
}

/// Spawn a gem worth 1-5 points
pub fn spawn_gem(state: &mut GameState) {
    let bounds = state.rules.bounds;
    let rng = &mut state.rng;
    let size = rng.random_int(GEM_SIZE.0, GEM_SIZE.1);
    let color = rng.random_color();
    let value = rng.random_int(GEM_VALUE.0, GEM_VALUE.1) as u32;
    let pos = random_position(rng, &bounds, size);
    debug_assert!(bounds.contains_box(pos, size as f32));

    log::debug!("gem spawned at {pos} (value {value})");
    state.gems.push(Gem {
        pos,
        size: size as f32,
        color,
        value,
    });
    state.events.push(GameEvent::GemSpawned);
}

/// Spawn a powerup of a uniformly chosen kind
pub fn spawn_powerup(state: &mut GameState) {
    let bounds = state.rules.bounds;
    let rng = &mut state.rng;
    let kind = rng.choose(&PowerupKind::ALL);
    let size = rng.random_int(POWERUP_SIZE.0, POWERUP_SIZE.1);
    let color = rng.random_color();
    let pos = random_position(rng, &bounds, size);
    debug_assert!(bounds.contains_box(pos, size as f32));

    log::debug!("{kind:?} powerup spawned at {pos}");
    state.powerups.push(Powerup {
        pos,
        size: size as f32,
        color,
        kind,
    });
    state.events.push(GameEvent::PowerupSpawned(kind));
}
