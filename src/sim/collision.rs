//! Player contact tests
//!
//! Every entity is tested against the player circle using its stored
//! position as the reference point. For squares that is the top-left
//! corner, not the center; hits are reported when the distance is below
//! `player.radius + size / 2`.

use glam::Vec2;

/// Whether a circle touches an entity of `size` anchored at `reference`
#[inline]
pub fn touches(center: Vec2, radius: f32, reference: Vec2, size: f32) -> bool {
    center.distance(reference) < radius + size / 2.0
}
