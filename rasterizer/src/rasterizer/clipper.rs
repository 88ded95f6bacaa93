use crate::math_prelude::*;
use crate::rasterizer::{Model, Plane, Triangle};

/// The part of a model left inside the view frustum, with every vertex already
/// in camera space. Triangle indices refer to `vertices`.
#[derive(Debug, Clone)]
pub struct ClippedModel {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<Triangle>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Classification {
    Inside,
    Outside,
    Straddling,
}

fn classify(plane: &Plane, vertices: &[Vec3], triangle: &Triangle) -> Classification {
    let inside = triangle
        .indices
        .iter()
        .filter(|&&i| plane.contains(vertices[i]))
        .count();
    match inside {
        3 => Classification::Inside,
        0 => Classification::Outside,
        _ => Classification::Straddling,
    }
}

/// Clips a model placed by `transform` (object to camera space) against `planes`.
///
/// Returns `None` when the bounding sphere lies entirely outside one of the
/// planes. Triangles crossing a plane are dropped whole instead of being
/// split at the boundary, so geometry near the frustum edges can pop in and
/// out. The result can hold vertices and no triangles.
pub fn clip(
    model: &Model,
    scale: f32,
    transform: &Mat4,
    planes: &[Plane],
) -> Option<ClippedModel> {
    let center = transform.transform_point3(model.bounds().center);
    let radius = model.bounds().radius * scale;
    if planes
        .iter()
        .any(|plane| plane.signed_distance(center) < -radius)
    {
        return None;
    }

    let vertices: Vec<Vec3> = model
        .vertices()
        .iter()
        .map(|v| transform.transform_point3(*v))
        .collect();

    let mut triangles = model.triangles().to_vec();
    for plane in planes {
        triangles.retain(|t| classify(plane, &vertices, t) == Classification::Inside);
    }

    Some(ClippedModel {
        vertices,
        triangles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::{BoundingSphere, Camera, Color};

    fn strip() -> Model {
        // Three triangles spread along X at z = 0.
        let vertices = vec![
            Vec3::new(-6.0, 0.0, 0.0),
            Vec3::new(-5.0, 1.0, 0.0),
            Vec3::new(-4.0, 0.0, 0.0),
            Vec3::new(-0.5, 0.0, 0.0),
            Vec3::new(0.0, 0.5, 0.0),
            Vec3::new(0.5, 0.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
        ];
        let triangles = vec![
            Triangle::new([0, 1, 2], Color::RED),
            Triangle::new([3, 4, 5], Color::GREEN),
            Triangle::new([5, 4, 6], Color::BLUE),
        ];
        Model::from_mesh("strip", vertices, triangles).unwrap()
    }

    #[test]
    fn rejects_instances_behind_the_camera() {
        let camera = Camera::new(100, 100, 90.0);
        let transform = Mat4::from_translation(Vec3::new(0.0, 0.0, -20.0));
        assert!(clip(&strip(), 1.0, &transform, camera.clipping_planes()).is_none());
    }

    #[test]
    fn radius_is_scaled_for_the_early_test() {
        let camera = Camera::new(100, 100, 90.0);
        let model = Model::new(
            "point",
            vec![Vec3::ZERO],
            Vec::new(),
            BoundingSphere::new(Vec3::ZERO, 1.0),
        )
        .unwrap();
        // Center 1.5 units behind the near plane.
        let transform = Mat4::from_translation(Vec3::new(0.0, 0.0, -0.5));
        assert!(clip(&model, 1.0, &transform, camera.clipping_planes()).is_none());
        assert!(clip(&model, 2.0, &transform, camera.clipping_planes()).is_some());
    }

    #[test]
    fn keeps_inside_and_drops_outside_and_straddling() {
        let camera = Camera::new(100, 100, 90.0);
        // At z = 5 the side planes sit at x = +-5.
        let transform = Mat4::from_translation(Vec3::new(0.0, 0.0, 5.0));
        let clipped = clip(&strip(), 1.0, &transform, camera.clipping_planes()).unwrap();

        assert_eq!(clipped.vertices.len(), 7);
        assert_eq!(clipped.triangles.len(), 1);
        assert_eq!(clipped.triangles[0].color, Color::GREEN);
        assert_eq!(clipped.vertices[4], Vec3::new(0.0, 0.5, 5.0));
    }

    #[test]
    fn may_return_vertices_without_triangles() {
        let camera = Camera::new(100, 100, 90.0);
        // Straddles the near plane: sphere overlaps it, every triangle crosses it.
        let vertices = vec![
            Vec3::new(-0.5, 0.0, -1.0),
            Vec3::new(0.0, 0.5, 1.0),
            Vec3::new(0.5, 0.0, 1.0),
        ];
        let model =
            Model::from_mesh("crossing", vertices, vec![Triangle::new([0, 1, 2], Color::RED)])
                .unwrap();
        let transform = Mat4::from_translation(Vec3::new(0.0, 0.0, 1.5));
        let clipped = clip(&model, 1.0, &transform, camera.clipping_planes()).unwrap();
        assert_eq!(clipped.vertices.len(), 3);
        assert!(clipped.triangles.is_empty());
    }
}
