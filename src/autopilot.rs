//! Demo autopilot
//!
//! Picks one directional input per frame for headless and attract-mode
//! runs: step away from the closest threatening square, otherwise head
//! for the nearest gem or powerup.

use glam::Vec2;

use crate::sim::{Direction, GameState};

/// Squares whose reference point is closer than this (beyond contact) are dodged
const DANGER_MARGIN: f32 = 40.0;

/// Dominant-axis direction that moves along `delta`
fn toward(delta: Vec2) -> Option<Direction> {
    if delta.length_squared() < 1.0 {
        return None;
    }
    Some(if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 { Direction::Right } else { Direction::Left }
    } else if delta.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    })
}

/// Choose the next input, or `None` to stand still
pub fn choose(state: &GameState) -> Option<Direction> {
    if state.is_game_over() {
        return None;
    }
    let player = &state.player;

    let threat = state
        .squares
        .iter()
        .map(|s| {
            // Look one step ahead along the fall
            let ahead = s.pos + Vec2::new(0.0, s.speed);
            let gap = player.pos.distance(ahead) - (player.radius + s.size / 2.0);
            (ahead, gap)
        })
        .filter(|&(_, gap)| gap < DANGER_MARGIN)
        .min_by(|a, b| a.1.total_cmp(&b.1));

    if let Some((ahead, _)) = threat {
        let mut away = player.pos - ahead;
        // Pinned against a wall: slide sideways instead
        let b = state.bounds();
        if (player.pos.y <= player.radius && away.y < 0.0)
            || (player.pos.y >= b.height - player.radius && away.y > 0.0)
        {
            away.y = 0.0;
            away.x += if player.pos.x < b.width / 2.0 { 1.0 } else { -1.0 };
        }
        return toward(away);
    }

    let pickups = state
        .gems
        .iter()
        .map(|g| g.pos)
        .chain(state.powerups.iter().map(|p| p.pos));
    pickups
        .min_by(|a, b| player.pos.distance(*a).total_cmp(&player.pos.distance(*b)))
        .and_then(|target| toward(target - player.pos))
}
