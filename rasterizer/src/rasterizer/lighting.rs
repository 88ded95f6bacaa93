use crate::math_prelude::*;
use crate::rasterizer::{Camera, Light, ShadingConfig};

#[derive(Debug, Copy, Clone)]
enum CameraSpaceLight {
    Ambient { intensity: f32 },
    Point { intensity: f32, position: Vec3 },
    Directional { intensity: f32, direction: Vec3 },
}

/// Lights of a scene moved into camera space once per frame, ready to be
/// evaluated at many points.
#[derive(Debug, Clone)]
pub struct Lighting {
    lights: Vec<CameraSpaceLight>,
    diffuse: bool,
    specular: bool,
    specular_exponent: u32,
}

impl Lighting {
    pub fn new(camera: &Camera, config: &ShadingConfig, lights: &[Light]) -> Self {
        let view = camera.view_matrix();
        let rotation = camera.orientation().transpose();
        let lights = lights
            .iter()
            .map(|light| match *light {
                Light::Ambient { intensity } => CameraSpaceLight::Ambient { intensity },
                Light::Point {
                    intensity,
                    position,
                } => CameraSpaceLight::Point {
                    intensity,
                    position: view.transform_point3(position),
                },
                Light::Directional {
                    intensity,
                    direction,
                } => CameraSpaceLight::Directional {
                    intensity,
                    direction: rotation.transform_vector3(direction),
                },
            })
            .collect();

        Self {
            lights,
            diffuse: config.diffuse,
            specular: config.specular,
            specular_exponent: config.specular_exponent,
        }
    }

    /// Total light intensity at a camera space `point` with surface `normal`.
    /// The normal does not need to be unit length. The result is not clamped.
    pub fn illuminate(&self, point: Vec3, normal: Vec3) -> f32 {
        let mut illumination = 0.0;
        let normal_length = normal.length();
        // The eye sits at the camera space origin.
        let view = -point;
        let view_length = view.length();

        for light in &self.lights {
            let (intensity, to_light) = match *light {
                CameraSpaceLight::Ambient { intensity } => {
                    illumination += intensity;
                    continue;
                }
                CameraSpaceLight::Point {
                    intensity,
                    position,
                } => (intensity, position - point),
                CameraSpaceLight::Directional {
                    intensity,
                    direction,
                } => (intensity, direction),
            };

            let light_length = to_light.length();
            if normal_length == 0.0 || light_length == 0.0 {
                continue;
            }

            if self.diffuse {
                let n_dot_l = normal.dot(to_light);
                if n_dot_l > 0.0 {
                    illumination += intensity * n_dot_l / (normal_length * light_length);
                }
            }

            if self.specular && view_length > 0.0 {
                let unit_normal = normal / normal_length;
                let reflected = unit_normal * (2.0 * unit_normal.dot(to_light)) - to_light;
                let r_dot_v = reflected.dot(view);
                if r_dot_v > 0.0 {
                    let cos = r_dot_v / (reflected.length() * view_length);
                    illumination += intensity * cos.powi(self.specular_exponent as i32);
                }
            }
        }

        illumination
    }
}

/// Evaluates the scene lights at a single camera space point.
///
/// Prefer building a [`Lighting`] once when evaluating many points for the same
/// camera.
pub fn illuminate(
    point: Vec3,
    normal: Vec3,
    camera: &Camera,
    config: &ShadingConfig,
    lights: &[Light],
) -> f32 {
    Lighting::new(camera, config, lights).illuminate(point, normal)
}
