//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::Presenter;
use super::scene::{DrawCommand, Scene};
use super::vertex::{Vertex, as_bytes};

/// Segments used for circles unless configured otherwise
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled rectangle from its top-left corner
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Presenter that turns each scene into a triangle list
///
/// Text is not tessellated; the latest score label is kept for the host's
/// own text rendering.
#[derive(Debug)]
pub struct VertexPresenter {
    circle_segments: u32,
    pub vertices: Vec<Vertex>,
    pub label: String,
    pub overlay_visible: bool,
    pub frames: u64,
}

impl VertexPresenter {
    pub fn new(circle_segments: u32) -> Self {
        assert!(circle_segments >= 3, "a circle needs at least 3 segments");
        Self {
            circle_segments,
            vertices: Vec::new(),
            label: String::new(),
            overlay_visible: false,
            frames: 0,
        }
    }
}

impl VertexPresenter {
    /// Last frame's triangles as raw bytes, ready for a buffer upload
    pub fn bytes(&self) -> &[u8] {
        as_bytes(&self.vertices)
    }
}

impl Default for VertexPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_CIRCLE_SEGMENTS)
    }
}

impl Presenter for VertexPresenter {
    fn present(&mut self, scene: &Scene) {
        // Clear: every frame starts from an empty buffer
        self.vertices.clear();

        for command in &scene.commands {
            match command {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => self.vertices.extend(circle(
                    *center,
                    *radius,
                    color.to_rgba(),
                    self.circle_segments,
                )),
                DrawCommand::Rect { pos, size, color } => {
                    self.vertices.extend(rect(*pos, *size, color.to_rgba()))
                }
                DrawCommand::Text { text, .. } => self.label.clone_from(text),
            }
        }

        self.overlay_visible = scene.game_over;
        self.frames += 1;
    }
}
