//! Player movement from directional input
//!
//! Input arrives once per key event, independent of the tick rate, and
//! moves the player a fixed step before clamping it back inside the world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Map a key name (`ArrowUp`, `w`, ...) to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit offset in screen coordinates (y grows downward)
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }
}

/// Move the player one step and clamp it to `[radius, extent - radius]`
///
/// Does nothing once the game is over.
pub fn move_player(state: &mut GameState, direction: Direction) {
    if state.is_game_over() {
        return;
    }

    let bounds = state.rules.bounds;
    let player = &mut state.player;
    let r = player.radius;
    let moved = player.pos + direction.delta() * state.rules.player_step;

    // max/min rather than clamp: a grown radius may exceed half the world
    player.pos.x = moved.x.max(r).min(bounds.width - r);
    player.pos.y = moved.y.max(r).min(bounds.height - r);
}
