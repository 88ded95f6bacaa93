#![allow(dead_code)]

use std::sync::Arc;

use glam::Vec3;
use rasterizer::{shapes, Camera, Color, Model, Rasterizer, RasterizerConfig, ShadingConfig, Triangle};

pub const WIDTH: u32 = 100;
pub const HEIGHT: u32 = 100;

pub fn camera() -> Camera {
    Camera::new(WIDTH, HEIGHT, 90.0)
}

pub fn ambient_only() -> ShadingConfig {
    ShadingConfig {
        diffuse: false,
        specular: false,
        ..Default::default()
    }
}

pub fn rasterizer(shading: ShadingConfig) -> Rasterizer {
    let config = RasterizerConfig {
        shading,
        ..Default::default()
    };
    Rasterizer::new(WIDTH, HEIGHT, config).unwrap()
}

pub fn clear_color() -> u32 {
    RasterizerConfig::default().clear_color.to_rgba()
}

/// A triangle around the local origin in the z = 0 plane, facing -Z (towards
/// a camera looking down +Z) unless `reversed`.
pub fn facing_triangle(color: Color, reversed: bool) -> Arc<Model> {
    let vertices = vec![
        Vec3::new(-0.5, -0.5, 0.0),
        Vec3::new(0.0, 0.5, 0.0),
        Vec3::new(0.5, -0.5, 0.0),
    ];
    let indices = if reversed { [0, 2, 1] } else { [0, 1, 2] };
    let normals = [Vec3::new(0.0, 0.0, -1.0); 3];
    let triangles = vec![Triangle::with_normals(indices, color, normals)];
    Arc::new(Model::from_mesh("triangle", vertices, triangles).unwrap())
}

pub fn cube() -> Arc<Model> {
    Arc::new(shapes::cube().unwrap())
}

/// Buffer index of canvas pixel (0, 0).
pub fn center_index() -> usize {
    ((HEIGHT / 2 - 1) * WIDTH + WIDTH / 2) as usize
}

pub fn drawn_pixels(buffer: &[u32]) -> usize {
    let clear = clear_color();
    buffer.iter().filter(|&&c| c != clear).count()
}
