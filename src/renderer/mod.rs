//! Presentation seam
//!
//! The core never draws. Each frame it hands a [`Scene`] (plain draw
//! commands built from the game state) to a [`Presenter`]. Hosts implement
//! the trait for their canvas; [`VertexPresenter`] tessellates scenes into
//! triangle lists ready for a GPU buffer.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{DrawCommand, Scene};
pub use shapes::VertexPresenter;
pub use vertex::Vertex;

/// Something that can show a frame
pub trait Presenter {
    /// Draw a scene, replacing whatever was shown before
    fn present(&mut self, scene: &Scene);
}

/// Presenter that draws nothing, for headless runs
#[derive(Debug, Default)]
pub struct NullPresenter {
    pub frames: u64,
}

impl Presenter for NullPresenter {
    fn present(&mut self, _scene: &Scene) {
        self.frames += 1;
    }
}
