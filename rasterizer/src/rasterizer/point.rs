use crate::math_prelude::*;

/// A pixel position in canvas space: origin at the center of the viewport, +Y up.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CanvasPoint {
    pub x: i32,
    pub y: i32,
}

impl CanvasPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Maps a point on the viewport rectangle `[-aspect/2, aspect/2] x [-0.5, 0.5]`
    /// onto a `width` x `height` canvas.
    pub fn from_viewport(point: Vec2, width: u32, height: u32) -> Self {
        let aspect = width as f32 / height as f32;
        let x = point.x * width as f32 / aspect;
        let y = point.y * height as f32;
        Self::new(x.floor() as i32, y.floor() as i32)
    }

    pub fn to_viewport(self, width: u32, height: u32) -> Vec2 {
        let aspect = width as f32 / height as f32;
        Vec2::new(
            self.x as f32 * aspect / width as f32,
            self.y as f32 / height as f32,
        )
    }
}
