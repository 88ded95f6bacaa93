use crate::math_prelude::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Light {
    /// Applied uniformly to every point.
    Ambient { intensity: f32 },
    /// Emits from a world space position.
    Point { intensity: f32, position: Vec3 },
    /// Lights everything from a fixed world space direction, pointing towards the light.
    Directional { intensity: f32, direction: Vec3 },
}

impl Light {
    pub fn ambient(intensity: f32) -> Self {
        Self::Ambient { intensity }
    }

    pub fn point(intensity: f32, position: Vec3) -> Self {
        Self::Point {
            intensity,
            position,
        }
    }

    pub fn directional(intensity: f32, direction: Vec3) -> Self {
        Self::Directional {
            intensity,
            direction,
        }
    }
}
