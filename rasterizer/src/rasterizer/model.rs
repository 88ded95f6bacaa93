use crate::math_prelude::*;
use crate::rasterizer::{Color, RasterError};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    /// Indices into the vertices of the owning model.
    pub indices: [usize; 3],
    pub color: Color,
    /// Object space normals for each of the three vertices, in the same order
    /// as `indices`.
    pub normals: Option<[Vec3; 3]>,
}

impl Triangle {
    pub fn new(indices: [usize; 3], color: Color) -> Self {
        Self {
            indices,
            color,
            normals: None,
        }
    }

    pub fn with_normals(indices: [usize; 3], color: Color, normals: [Vec3; 3]) -> Self {
        Self {
            indices,
            color,
            normals: Some(normals),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Sphere centered on the vertex centroid, just large enough to contain every vertex.
    pub fn enclosing(vertices: &[Vec3]) -> Self {
        if vertices.is_empty() {
            return Self::new(Vec3::ZERO, 0.0);
        }
        let center = vertices.iter().fold(Vec3::ZERO, |acc, v| acc + *v) / vertices.len() as f32;
        let radius = vertices
            .iter()
            .map(|v| v.distance(center))
            .fold(0.0f32, f32::max);
        Self::new(center, radius)
    }
}

/// Immutable mesh data. Shared between instances behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Model {
    name: String,
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
    bounds: BoundingSphere,
}

impl Model {
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        triangles: Vec<Triangle>,
        bounds: BoundingSphere,
    ) -> Result<Self, RasterError> {
        let name = name.into();
        for (index, triangle) in triangles.iter().enumerate() {
            if let Some(&vertex) = triangle.indices.iter().find(|&&i| i >= vertices.len()) {
                return Err(RasterError::InvalidTriangle {
                    model: name,
                    triangle: index,
                    vertex,
                    vertex_count: vertices.len(),
                });
            }
        }

        Ok(Self {
            name,
            vertices,
            triangles,
            bounds,
        })
    }

    /// Like [`Model::new`], with the bounding sphere computed from the vertices.
    pub fn from_mesh(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        triangles: Vec<Triangle>,
    ) -> Result<Self, RasterError> {
        let bounds = BoundingSphere::enclosing(&vertices);
        Self::new(name, vertices, triangles, bounds)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn bounds(&self) -> &BoundingSphere {
        &self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_out_of_range_indices() {
        let vertices = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
        let triangles = vec![
            Triangle::new([0, 1, 2], Color::RED),
            Triangle::new([0, 3, 2], Color::RED),
        ];
        match Model::from_mesh("broken", vertices, triangles) {
            Err(RasterError::InvalidTriangle {
                triangle, vertex, ..
            }) => {
                assert_eq!(triangle, 1);
                assert_eq!(vertex, 3);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn enclosing_sphere_contains_all_vertices() {
        let vertices = [
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(-1.0, 1.0, -1.0),
        ];
        let sphere = BoundingSphere::enclosing(&vertices);
        assert_relative_eq!(sphere.center.length(), 0.0);
        assert_relative_eq!(sphere.radius, 3.0f32.sqrt(), epsilon = 1e-6);
    }
}
