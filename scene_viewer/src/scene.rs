//! Scene descriptions loaded from TOML.
//!
//! ```toml
//! [camera]
//! position = [0.0, 0.0, 0.0]
//! yaw = 0.0
//! fov = 90.0
//!
//! [[lights]]
//! kind = "ambient"
//! intensity = 0.2
//!
//! [[lights]]
//! kind = "point"
//! intensity = 0.6
//! position = [-3.0, 2.0, -10.0]
//!
//! [[instances]]
//! model = "cube"
//! position = [0.0, 0.0, 5.0]
//! outlines = true
//! ```

use std::path::Path;
use std::sync::Arc;

use glam::Vec3;
use rasterizer::{shapes, Camera, CameraPose, Color, Instance, Light, Model, Pose};
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

const SPHERE_DIVISIONS: usize = 15;

fn one() -> f32 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub pitch: f32,
    #[serde(default)]
    pub roll: f32,
    #[serde(default = "CameraDescription::default_fov")]
    pub fov: f32,
}

impl CameraDescription {
    fn default_fov() -> f32 {
        Camera::DEFAULT_FOV
    }
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            fov: Camera::DEFAULT_FOV,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LightDescription {
    Ambient {
        intensity: f32,
    },
    Point {
        intensity: f32,
        position: [f32; 3],
    },
    /// `direction` points towards the light.
    Directional {
        intensity: f32,
        direction: [f32; 3],
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Cube,
    Sphere,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceDescription {
    pub model: ModelKind,
    pub position: [f32; 3],
    #[serde(default = "one")]
    pub scale: f32,
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub pitch: f32,
    #[serde(default)]
    pub roll: f32,
    #[serde(default)]
    pub outlines: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraDescription,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
    #[serde(default)]
    pub instances: Vec<InstanceDescription>,
}

/// Everything needed to render frames of a scene.
pub struct Scene {
    pub camera: Camera,
    pub instances: Vec<Instance>,
    pub lights: Vec<Light>,
}

impl SceneDescription {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ViewerError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ViewerError> {
        let scene: Self = toml::from_str(contents)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Two cubes and a sphere seen from the left.
    pub fn demo() -> Self {
        let instance = |model, position, scale, yaw| InstanceDescription {
            model,
            position,
            scale,
            yaw,
            pitch: 0.0,
            roll: 0.0,
            outlines: false,
        };
        Self {
            camera: CameraDescription {
                position: [-3.0, 1.0, 2.0],
                yaw: 30.0,
                ..Default::default()
            },
            lights: vec![
                LightDescription::Ambient { intensity: 0.2 },
                LightDescription::Directional {
                    intensity: 0.2,
                    direction: [-1.0, 0.0, 1.0],
                },
                LightDescription::Point {
                    intensity: 0.6,
                    position: [-3.0, 2.0, -10.0],
                },
            ],
            instances: vec![
                instance(ModelKind::Cube, [-1.5, 0.0, 7.0], 0.75, 0.0),
                instance(ModelKind::Cube, [1.25, 2.5, 7.5], 1.0, 195.0),
                instance(ModelKind::Sphere, [1.75, -0.5, 7.0], 1.5, 0.0),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), ViewerError> {
        let invalid = |msg: String| Err(ViewerError::InvalidScene(msg));

        let fov = self.camera.fov;
        if !(fov > 0.0 && fov < 180.0) {
            return invalid(format!("camera fov {} is not in (0, 180)", fov));
        }
        for (i, light) in self.lights.iter().enumerate() {
            let intensity = match *light {
                LightDescription::Ambient { intensity } => intensity,
                LightDescription::Point { intensity, .. } => intensity,
                LightDescription::Directional {
                    intensity,
                    direction,
                } => {
                    if Vec3::from(direction) == Vec3::ZERO {
                        return invalid(format!("light {} has a zero direction", i));
                    }
                    intensity
                }
            };
            if !intensity.is_finite() || intensity < 0.0 {
                return invalid(format!("light {} has intensity {}", i, intensity));
            }
        }
        for (i, instance) in self.instances.iter().enumerate() {
            if !instance.scale.is_finite() || instance.scale <= 0.0 {
                return invalid(format!("instance {} has scale {}", i, instance.scale));
            }
        }
        Ok(())
    }

    pub fn build(&self, width: u32, height: u32, outlines: bool) -> Result<Scene, ViewerError> {
        self.validate()?;

        let mut camera = Camera::new(width, height, self.camera.fov);
        camera.set_pose(CameraPose {
            position: self.camera.position.into(),
            yaw: self.camera.yaw,
            pitch: self.camera.pitch,
            roll: self.camera.roll,
        });

        let lights = self
            .lights
            .iter()
            .map(|light| match *light {
                LightDescription::Ambient { intensity } => Light::ambient(intensity),
                LightDescription::Point {
                    intensity,
                    position,
                } => Light::point(intensity, position.into()),
                LightDescription::Directional {
                    intensity,
                    direction,
                } => Light::directional(intensity, direction.into()),
            })
            .collect();

        let cube = Arc::new(shapes::cube()?);
        let sphere = Arc::new(shapes::sphere(SPHERE_DIVISIONS, Color::GREEN)?);
        let instances = self
            .instances
            .iter()
            .map(|desc| {
                let model: &Arc<Model> = match desc.model {
                    ModelKind::Cube => &cube,
                    ModelKind::Sphere => &sphere,
                };
                let pose = Pose {
                    position: desc.position.into(),
                    scale: desc.scale,
                    yaw: desc.yaw,
                    pitch: desc.pitch,
                    roll: desc.roll,
                };
                let mut instance = Instance::new(model.clone(), pose);
                instance.set_draw_outlines(desc.outlines || outlines);
                instance
            })
            .collect();

        Ok(Scene {
            camera,
            instances,
            lights,
        })
    }
}
