//! Drawing seam. The scene only delegates; rendering lives elsewhere.

use crate::core::shapes::{BoxShape, Plane, Sphere};

/// Implemented by whatever draws the scene's shapes.
pub trait ShapeRenderer {
    fn name(&self) -> &str;

    fn draw_sphere(&mut self, _sphere: &Sphere) {}

    fn draw_plane(&mut self, _plane: &Plane) {}

    fn draw_box(&mut self, _cuboid: &BoxShape) {}
}

/// Renderer that draws nothing.
#[derive(Debug, Default)]
pub struct NoopRenderer;

impl NoopRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ShapeRenderer for NoopRenderer {
    fn name(&self) -> &str {
        "noop"
    }
}
