use std::time::Duration;

/// What happened during the last rendered frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrameStats {
    pub(crate) time_geometry: Duration,
    pub(crate) time_rasterization: Duration,
    pub(crate) instances_rejected: usize,
    pub(crate) triangles_clipped_in: usize,
    pub(crate) triangles_culled: usize,
    pub(crate) pixels_written: usize,
}

impl FrameStats {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Time spent transforming, clipping and projecting.
    pub fn geometry_stage(&self) -> &Duration {
        &self.time_geometry
    }

    /// Time spent filling triangles, including shading and outlines.
    pub fn rasterization_stage(&self) -> &Duration {
        &self.time_rasterization
    }

    pub fn total(&self) -> Duration {
        *self.geometry_stage() + *self.rasterization_stage()
    }

    /// Instances whose bounding sphere was entirely outside the frustum.
    pub fn instances_rejected(&self) -> usize {
        self.instances_rejected
    }

    /// Triangles that survived clipping.
    pub fn triangles_clipped_in(&self) -> usize {
        self.triangles_clipped_in
    }

    /// Clipped in triangles skipped because they face away from the camera.
    pub fn triangles_culled(&self) -> usize {
        self.triangles_culled
    }

    /// Pixels that passed the depth test, outlines excluded.
    pub fn pixels_written(&self) -> usize {
        self.pixels_written
    }
}
