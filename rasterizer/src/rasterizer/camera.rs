use crate::math_prelude::*;
use log::warn;

/// Camera space `z` of the near clipping plane. Only points with `z` strictly
/// greater than this are inside the frustum.
pub const NEAR_PLANE_Z: f32 = 1.0;

/// A plane `dot(normal, p) + d = 0`. Points with a positive signed distance are inside.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    pub fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }

    pub fn contains(&self, point: Vec3) -> bool {
        self.signed_distance(point) > 0.0
    }
}

/// Rotation by yaw (around Y), then pitch (around X), then roll (around Z),
/// all in degrees.
pub(crate) fn yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Mat4 {
    Mat4::from_rotation_y(yaw.to_radians())
        * Mat4::from_rotation_x(pitch.to_radians())
        * Mat4::from_rotation_z(roll.to_radians())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl CameraPose {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }
}

/// A pinhole camera looking down +Z in camera space.
///
/// Every setter recomputes the derived state (orientation matrix, focal length
/// and clipping planes) before returning, so readers never observe inputs and
/// derived values that disagree.
#[derive(Debug, Clone)]
pub struct Camera {
    pose: CameraPose,
    orientation: Mat4,
    fov: f32,
    width: u32,
    height: u32,
    aspect: f32,
    focal_length: f32,
    planes: [Plane; 5],
}

impl Camera {
    pub const DEFAULT_FOV: f32 = 90.0;

    /// `fov` is the horizontal field of view in degrees.
    pub fn new(width: u32, height: u32, fov: f32) -> Self {
        let mut camera = Self {
            pose: CameraPose::default(),
            orientation: Mat4::IDENTITY,
            fov,
            width,
            height,
            aspect: 1.0,
            focal_length: 1.0,
            planes: [Plane::new(Vec3::Z, -NEAR_PLANE_Z); 5],
        };
        camera.update_projection();
        camera
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn set_pose(&mut self, pose: CameraPose) {
        self.pose = pose;
        self.orientation = yaw_pitch_roll(pose.yaw, pose.pitch, pose.roll);
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.set_pose(CameraPose {
            position,
            ..self.pose
        });
    }

    pub fn set_orientation(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.set_pose(CameraPose {
            yaw,
            pitch,
            roll,
            ..self.pose
        });
    }

    pub fn orientation(&self) -> &Mat4 {
        &self.orientation
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
        self.update_projection();
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.update_projection();
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect
    }

    /// Distance from the eye to the projection plane, used for the perspective divide.
    pub fn projection_plane_distance(&self) -> f32 {
        self.focal_length
    }

    /// Near, left, right, top and bottom planes, in camera space.
    pub fn clipping_planes(&self) -> &[Plane; 5] {
        &self.planes
    }

    /// World to camera space. Exact as long as the orientation is a pure rotation.
    pub fn view_matrix(&self) -> Mat4 {
        self.orientation.transpose() * Mat4::from_translation(-self.pose.position)
    }

    /// Projects a camera space point onto the viewport rectangle
    /// `[-aspect/2, aspect/2] x [-0.5, 0.5]`. `point.z` must be past the near plane.
    pub fn project(&self, point: Vec3) -> Vec2 {
        let f = self.focal_length;
        Vec2::new(point.x * f / point.z, point.y * f / point.z)
    }

    /// Inverse of [`Camera::project`] given the inverse depth `1/z` of the point.
    pub fn unproject(&self, viewport: Vec2, inv_z: f32) -> Vec3 {
        let z = 1.0 / inv_z;
        let f = self.focal_length;
        Vec3::new(viewport.x * z / f, viewport.y * z / f, z)
    }

    /// False when the viewport has a zero dimension or the field of view is
    /// outside `(0, 180)` degrees. The focal length and planes are not finite then.
    pub fn has_valid_projection(&self) -> bool {
        self.width > 0 && self.height > 0 && self.fov > 0.0 && self.fov < 180.0
    }

    fn update_projection(&mut self) {
        if !self.has_valid_projection() {
            warn!(
                "degenerate camera projection: {}x{} viewport, {} degree fov",
                self.width, self.height, self.fov
            );
        }
        self.aspect = self.width as f32 / self.height as f32;
        self.focal_length = self.aspect / (2.0 * (self.fov.to_radians() / 2.0).tan());

        let side = Vec2::new(self.focal_length, 0.5 * self.aspect).normalize();
        let vertical = Vec2::new(self.focal_length, 0.5).normalize();
        self.planes = [
            // near
            Plane::new(Vec3::Z, -NEAR_PLANE_Z),
            // left
            Plane::new(Vec3::new(side.x, 0.0, side.y), 0.0),
            // right
            Plane::new(Vec3::new(-side.x, 0.0, side.y), 0.0),
            // top
            Plane::new(Vec3::new(0.0, -vertical.x, vertical.y), 0.0),
            // bottom
            Plane::new(Vec3::new(0.0, vertical.x, vertical.y), 0.0),
        ];
    }
}
