use std::sync::Arc;

use crate::math_prelude::*;
use crate::rasterizer::camera::yaw_pitch_roll;
use crate::rasterizer::Model;

/// Placement of a model in world space. Angles are in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub scale: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Pose {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// `T(position) * R(yaw, pitch, roll) * S(scale)`: scale first, then rotate,
    /// then translate.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * yaw_pitch_roll(self.yaw, self.pitch, self.roll)
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Instance {
    model: Arc<Model>,
    pose: Pose,
    transform: Mat4,
    draw_outlines: bool,
    triangles_rendered: usize,
}

impl Instance {
    pub fn new(model: Arc<Model>, pose: Pose) -> Self {
        Self {
            model,
            pose,
            transform: pose.transform(),
            draw_outlines: false,
            triangles_rendered: 0,
        }
    }

    pub fn at(model: Arc<Model>, position: Vec3) -> Self {
        Self::new(model, Pose::at(position))
    }

    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Replaces the whole pose and the cached transform together.
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
        self.transform = pose.transform();
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.set_pose(Pose {
            position,
            ..self.pose
        });
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.set_pose(Pose {
            scale,
            ..self.pose
        });
    }

    pub fn set_orientation(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.set_pose(Pose {
            yaw,
            pitch,
            roll,
            ..self.pose
        });
    }

    pub fn scale(&self) -> f32 {
        self.pose.scale
    }

    /// Local to world transform.
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    pub fn draws_outlines(&self) -> bool {
        self.draw_outlines
    }

    pub fn set_draw_outlines(&mut self, draw_outlines: bool) {
        self.draw_outlines = draw_outlines;
    }

    /// Number of triangles that survived clipping and were rasterized in the last frame.
    pub fn triangles_rendered(&self) -> usize {
        self.triangles_rendered
    }

    pub(crate) fn record_triangles_rendered(&mut self, count: usize) {
        self.triangles_rendered = count;
    }
}
