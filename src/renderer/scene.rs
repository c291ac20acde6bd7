//! Draw commands for one frame

use glam::Vec2;

use crate::sim::{Color, GameState};

/// Where the score label sits, in world units
pub const SCORE_LABEL_POS: Vec2 = Vec2::new(8.0, 20.0);

/// A single primitive, in world coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled circle
    Circle { center: Vec2, radius: f32, color: Color },
    /// Filled axis-aligned rectangle from its top-left corner
    Rect { pos: Vec2, size: Vec2, color: Color },
    /// Text anchored at its baseline start
    Text { pos: Vec2, text: String, color: Color },
}

/// Everything a presenter needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// World size; the presenter clears this whole area first
    pub size: Vec2,
    /// Draw order is back to front
    pub commands: Vec<DrawCommand>,
    /// Show the game-over overlay
    pub game_over: bool,
    pub score: u64,
}

impl Scene {
    /// Build the frame for the current state
    ///
    /// Gems and powerups are drawn with their size as the radius, so they
    /// look larger than their pickup area.
    pub fn from_state(state: &GameState) -> Self {
        let bounds = state.bounds();
        let mut commands = Vec::with_capacity(
            2 + state.squares.len() + state.gems.len() + state.powerups.len(),
        );

        commands.push(DrawCommand::Circle {
            center: state.player.pos,
            radius: state.player.radius,
            color: state.player.look.color(),
        });
        commands.extend(state.squares.iter().map(|s| DrawCommand::Rect {
            pos: s.pos,
            size: Vec2::splat(s.size),
            color: s.color,
        }));
        commands.extend(state.gems.iter().map(|g| DrawCommand::Circle {
            center: g.pos,
            radius: g.size,
            color: g.color,
        }));
        commands.extend(state.powerups.iter().map(|p| DrawCommand::Circle {
            center: p.pos,
            radius: p.size,
            color: p.color,
        }));
        commands.push(DrawCommand::Text {
            pos: SCORE_LABEL_POS,
            text: format!("Score: {}", state.score),
            color: Color::BLACK,
        });

        Self {
            size: Vec2::new(bounds.width, bounds.height),
            commands,
            game_over: state.is_game_over(),
            score: state.score,
        }
    }
}
