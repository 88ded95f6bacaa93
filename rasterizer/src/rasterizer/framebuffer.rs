use log::debug;

use crate::rasterizer::{CanvasPoint, RasterError};

fn allocate<T: Clone>(len: usize, value: T) -> Result<Vec<T>, RasterError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|source| RasterError::Allocation {
            pixels: len,
            source,
        })?;
    buffer.resize(len, value);
    Ok(buffer)
}

/// Two packed RGBA color buffers and one inverse depth buffer.
///
/// Drawing always targets the back buffer. [`Framebuffer::swap`] publishes it
/// as the front buffer and starts writing into the other one.
#[derive(Debug)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    color: [Vec<u32>; 2],
    depth: Vec<f32>,
    back: usize,
}

impl Framebuffer {
    /// Depth value of a pixel nothing has been drawn to this frame.
    pub const EMPTY_DEPTH: f32 = f32::NEG_INFINITY;

    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidViewport { width, height });
        }
        let size = width as usize * height as usize;
        let color = [allocate(size, 0u32)?, allocate(size, 0u32)?];
        let depth = allocate(size, Self::EMPTY_DEPTH)?;
        debug!("allocated {}x{} frame and depth buffers", width, height);
        Ok(Self {
            width,
            height,
            color,
            depth,
            back: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fills the back buffer with `color` and resets every depth to [`Framebuffer::EMPTY_DEPTH`].
    pub fn clear(&mut self, color: u32) {
        self.color[self.back].fill(color);
        self.depth.fill(Self::EMPTY_DEPTH);
    }

    /// Buffer index of a canvas position, `None` if it falls off the canvas.
    pub fn index_of(&self, point: CanvasPoint) -> Option<usize> {
        let x = point.x + (self.width / 2) as i32;
        let y = (self.height / 2) as i32 - point.y - 1;
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Writes a pixel into the back buffer. Off canvas writes are dropped.
    pub fn put_pixel(&mut self, point: CanvasPoint, rgba: u32) {
        if let Some(index) = self.index_of(point) {
            self.color[self.back][index] = rgba;
        }
    }

    /// Stores `inv_z` if it is strictly closer than what the pixel already holds.
    /// Returns whether the pixel should be drawn.
    pub fn update_depth_if_closer(&mut self, point: CanvasPoint, inv_z: f32) -> bool {
        match self.index_of(point) {
            Some(index) if inv_z > self.depth[index] => {
                self.depth[index] = inv_z;
                true
            }
            _ => false,
        }
    }

    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    /// The buffer currently being drawn.
    pub fn back(&self) -> &[u32] {
        &self.color[self.back]
    }

    /// The most recently completed buffer.
    pub fn front(&self) -> &[u32] {
        &self.color[1 - self.back]
    }

    /// Publishes the back buffer. Must only be called once the frame is complete.
    pub fn swap(&mut self) {
        self.back = 1 - self.back;
    }
}
