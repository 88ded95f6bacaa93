//! Procedural models.
//!
//! Triangles are wound so that `cross(v1 - v0, v2 - v0)` points out of the
//! shape, which is what backface culling expects.

use std::f32::consts::PI;

use crate::math_prelude::*;
use crate::rasterizer::{BoundingSphere, Color, Model, RasterError, Triangle};

/// A cube spanning `[-1, 1]` on every axis with one color per face.
pub fn cube() -> Result<Model, RasterError> {
    let faces = [
        Color::RED,
        Color::GREEN,
        Color::BLUE,
        Color::YELLOW,
        Color::PURPLE,
        Color::CYAN,
    ];
    cube_with_colors(faces)
}

/// Face order: +Z, +X, -Z, -X, +Y, -Y.
pub fn cube_with_colors(faces: [Color; 6]) -> Result<Model, RasterError> {
    let vertices = vec![
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ];

    let quads: [([usize; 4], Vec3); 6] = [
        ([0, 1, 2, 3], Vec3::Z),
        ([4, 0, 3, 7], Vec3::X),
        ([5, 4, 7, 6], -Vec3::Z),
        ([1, 5, 6, 2], -Vec3::X),
        ([4, 5, 1, 0], Vec3::Y),
        ([2, 6, 7, 3], -Vec3::Y),
    ];

    let triangles = quads
        .iter()
        .zip(faces.iter())
        .flat_map(|(&([a, b, c, d], normal), &color)| {
            let normals = [normal; 3];
            vec![
                Triangle::with_normals([a, b, c], color, normals),
                Triangle::with_normals([a, c, d], color, normals),
            ]
        })
        .collect();

    Model::new(
        "cube",
        vertices,
        triangles,
        BoundingSphere::new(Vec3::ZERO, 3.0f32.sqrt()),
    )
}

/// A unit sphere made of `divisions` rings of `divisions` vertices, with
/// smooth per vertex normals.
pub fn sphere(divisions: usize, color: Color) -> Result<Model, RasterError> {
    let divisions = divisions.max(3);
    let step = 2.0 * PI / divisions as f32;

    let mut vertices = Vec::with_capacity((divisions + 1) * divisions);
    for ring in 0..=divisions {
        let y = (2.0 / divisions as f32) * (ring as f32 - divisions as f32 / 2.0);
        let radius = (1.0 - y * y).max(0.0).sqrt();
        for i in 0..divisions {
            let angle = i as f32 * step;
            vertices.push(Vec3::new(radius * angle.cos(), y, radius * angle.sin()));
        }
    }

    let mut triangles = Vec::with_capacity(2 * divisions * divisions);
    for ring in 0..divisions {
        for i in 0..divisions {
            let i0 = ring * divisions + i;
            let i1 = (ring + 1) * divisions + (i + 1) % divisions;
            let i2 = ring * divisions + (i + 1) % divisions;
            for &indices in &[[i0, i1, i2], [i0, i0 + divisions, i1]] {
                let normals = [
                    vertices[indices[0]],
                    vertices[indices[1]],
                    vertices[indices[2]],
                ];
                triangles.push(Triangle::with_normals(indices, color, normals));
            }
        }
    }

    Model::new(
        "sphere",
        vertices,
        triangles,
        BoundingSphere::new(Vec3::ZERO, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_outward(model: &Model) {
        for triangle in model.triangles() {
            let [a, b, c] = triangle.indices.map(|i| model.vertices()[i]);
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            // Zero area triangles at the sphere poles have no orientation.
            if normal.length() > 1e-6 {
                assert!(normal.dot(centroid) > 0.0, "inward triangle {:?}", triangle);
            }
        }
    }

    #[test]
    fn cube_has_twelve_outward_triangles() {
        let cube = cube().unwrap();
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.triangles().len(), 12);
        assert_outward(&cube);
    }

    #[test]
    fn cube_normals_match_winding() {
        let cube = cube().unwrap();
        for triangle in cube.triangles() {
            let [a, b, c] = triangle.indices.map(|i| cube.vertices()[i]);
            let geometric = (b - a).cross(c - a).normalize();
            let stored = triangle.normals.unwrap()[0];
            assert!(geometric.dot(stored) > 0.99);
        }
    }

    #[test]
    fn sphere_vertices_lie_on_the_unit_sphere() {
        let sphere = sphere(12, Color::GREEN).unwrap();
        assert_eq!(sphere.triangles().len(), 2 * 12 * 12);
        for v in sphere.vertices() {
            assert!((v.length() - 1.0).abs() < 1e-4);
        }
        assert_outward(&sphere);
    }
}
