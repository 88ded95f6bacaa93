mod camera;
mod clipper;
mod color;
mod error;
mod frame_stats;
mod framebuffer;
mod instance;
mod interpolate;
mod light;
mod lighting;
mod model;
mod point;
mod shading;

pub use camera::{Camera, CameraPose, Plane, NEAR_PLANE_Z};
pub use clipper::{clip, ClippedModel};
pub use color::Color;
pub use error::RasterError;
pub use frame_stats::FrameStats;
pub use framebuffer::Framebuffer;
pub use instance::{Instance, Pose};
pub use interpolate::{edge_interpolate, interpolate, Lerp};
pub use light::Light;
pub use lighting::{illuminate, Lighting};
pub use model::{BoundingSphere, Model, Triangle};
pub use point::CanvasPoint;
pub use shading::{RasterizerConfig, ShadingConfig, ShadingModel};

use std::time::Instant;

use crate::math_prelude::*;
use itertools::Itertools;
use log::{debug, trace, warn};
use rasterizer_macros::Lerp;

/// Attributes carried along triangle edges and across scanlines.
#[derive(Debug, Copy, Clone, Lerp)]
struct Sample {
    x: f32,
    inv_z: f32,
    intensity: f32,
    normal: Vec3,
}

/// A projected triangle corner.
#[derive(Debug, Copy, Clone)]
struct Corner {
    y: i32,
    sample: Sample,
}

pub struct Rasterizer {
    framebuffer: Framebuffer,
    config: RasterizerConfig,
    frame_stats: FrameStats,
}

impl Rasterizer {
    pub fn new(width: u32, height: u32, config: RasterizerConfig) -> Result<Self, RasterError> {
        let framebuffer = Framebuffer::new(width, height)?;
        Ok(Self {
            framebuffer,
            config,
            frame_stats: FrameStats::zero(),
        })
    }

    /// Reallocates the buffers and updates the camera for a new viewport size.
    /// On failure both the rasterizer and the camera are left untouched.
    pub fn resize(
        &mut self,
        camera: &mut Camera,
        width: u32,
        height: u32,
    ) -> Result<(), RasterError> {
        self.framebuffer = Framebuffer::new(width, height)?;
        camera.set_viewport(width, height);
        debug!("rasterizer resized to {}x{}", width, height);
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    pub fn height(&self) -> u32 {
        self.framebuffer.height()
    }

    pub fn config(&self) -> &RasterizerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RasterizerConfig {
        &mut self.config
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// The last completed frame, row major, packed RGBA.
    pub fn front_buffer(&self) -> &[u32] {
        self.framebuffer.front()
    }

    pub fn frame_stats(&self) -> &FrameStats {
        &self.frame_stats
    }

    /// Renders one frame and returns the completed buffer. The next call draws
    /// into the other buffer.
    pub fn render(&mut self, camera: &Camera, instances: &mut [Instance], lights: &[Light]) -> &[u32] {
        if camera.viewport() != (self.width(), self.height()) {
            warn!(
                "camera viewport {:?} does not match the {}x{} frame buffer",
                camera.viewport(),
                self.width(),
                self.height()
            );
        }

        self.framebuffer.clear(self.config.clear_color.to_rgba());
        self.frame_stats = FrameStats::zero();

        if !camera.has_valid_projection() {
            warn!("camera projection is degenerate, rendering an empty frame");
            for instance in instances.iter_mut() {
                instance.record_triangles_rendered(0);
            }
            self.framebuffer.swap();
            return self.framebuffer.front();
        }

        let lighting = Lighting::new(camera, &self.config.shading, lights);
        let view = camera.view_matrix();

        for instance in instances.iter_mut() {
            let start = Instant::now();
            let model_view = view * *instance.transform();
            let clipped = clip(
                instance.model(),
                instance.scale(),
                &model_view,
                camera.clipping_planes(),
            );
            let clipped = match clipped {
                Some(clipped) => clipped,
                None => {
                    trace!("'{}' is outside the frustum", instance.model().name());
                    self.frame_stats.instances_rejected += 1;
                    self.frame_stats.time_geometry += start.elapsed();
                    instance.record_triangles_rendered(0);
                    continue;
                }
            };

            let projected: Vec<CanvasPoint> = clipped
                .vertices
                .iter()
                .map(|v| self.project_vertex(camera, *v))
                .collect();
            let normal_matrix = Mat3::from_mat4(model_view);
            self.frame_stats.time_geometry += start.elapsed();

            let start = Instant::now();
            for triangle in &clipped.triangles {
                self.render_triangle(
                    triangle,
                    &clipped.vertices,
                    &projected,
                    &normal_matrix,
                    camera,
                    &lighting,
                    instance.draws_outlines(),
                );
            }
            self.frame_stats.time_rasterization += start.elapsed();
            self.frame_stats.triangles_clipped_in += clipped.triangles.len();
            instance.record_triangles_rendered(clipped.triangles.len());
        }

        self.framebuffer.swap();
        trace!("frame done: {:?}", self.frame_stats);
        self.framebuffer.front()
    }

    fn project_vertex(&self, camera: &Camera, vertex: Vec3) -> CanvasPoint {
        CanvasPoint::from_viewport(camera.project(vertex), self.width(), self.height())
    }

    #[allow(clippy::too_many_arguments)]
    fn render_triangle(
        &mut self,
        triangle: &Triangle,
        vertices: &[Vec3],
        projected: &[CanvasPoint],
        normal_matrix: &Mat3,
        camera: &Camera,
        lighting: &Lighting,
        draw_outline: bool,
    ) {
        let [i0, i1, i2] = triangle.indices;
        let corners = [vertices[i0], vertices[i1], vertices[i2]];
        if corners.iter().any(|v| v.z <= NEAR_PLANE_Z) {
            warn!("skipping a triangle with a vertex at or behind the near plane");
            return;
        }

        // Winding of the unsorted vertices decides which side faces the camera.
        let [v0, v1, v2] = corners;
        let normal = (v1 - v0).cross(v2 - v0);
        if (-v0).dot(normal) <= 0.0 {
            self.frame_stats.triangles_culled += 1;
            return;
        }

        let shading = self.config.shading;
        let normals = match triangle.normals {
            Some(normals) if shading.use_vertex_normals => normals.map(|n| *normal_matrix * n),
            _ => [normal; 3],
        };
        let points = [projected[i0], projected[i1], projected[i2]];

        let corner = |k: usize| {
            let intensity = if shading.model == ShadingModel::Gouraud {
                lighting.illuminate(corners[k], normals[k])
            } else {
                0.0
            };
            Corner {
                y: points[k].y,
                sample: Sample {
                    x: points[k].x as f32,
                    inv_z: 1.0 / corners[k].z,
                    intensity,
                    normal: normals[k],
                },
            }
        };
        let mut sorted = [corner(0), corner(1), corner(2)];
        sorted.sort_by_key(|c| c.y);

        let color = triangle.color;
        match shading.model {
            ShadingModel::Flat => {
                let centroid = (v0 + v1 + v2) / 3.0;
                let intensity = lighting.illuminate(centroid, normal);
                self.fill_triangle(&sorted, color, |_, _| intensity);
            }
            ShadingModel::Gouraud => {
                self.fill_triangle(&sorted, color, |_, sample| sample.intensity);
            }
            ShadingModel::Phong => {
                let (width, height) = (self.width(), self.height());
                self.fill_triangle(&sorted, color, |point, sample| {
                    let position = camera.unproject(point.to_viewport(width, height), sample.inv_z);
                    lighting.illuminate(position, sample.normal)
                });
            }
        }

        if draw_outline {
            let outline = color.darkened().to_rgba();
            for (from, to) in points.iter().copied().circular_tuple_windows() {
                self.draw_line(from, to, outline);
            }
        }
    }

    /// Scanline fill of a triangle whose corners are sorted top to bottom by
    /// canvas Y. `shade` is called only for pixels that pass the depth test.
    fn fill_triangle<F>(&mut self, corners: &[Corner; 3], color: Color, mut shade: F)
    where
        F: FnMut(CanvasPoint, &Sample) -> f32,
    {
        let [c0, c1, c2] = *corners;
        let (long, short) =
            edge_interpolate(c0.y, c0.sample, c1.y, c1.sample, c2.y, c2.sample);

        let middle = long.len() / 2;
        let (left, right) = if long[middle].x < short[middle].x {
            (long, short)
        } else {
            (short, long)
        };

        for (row, y) in (c0.y..=c2.y).enumerate() {
            let (l, r) = (left[row], right[row]);
            let xl = l.x.floor() as i32;
            let xr = r.x.floor() as i32;
            let span = interpolate(xl, l, xr, r);

            for (x, sample) in (xl..=xr).zip(span.iter()) {
                let point = CanvasPoint::new(x, y);
                if self.framebuffer.update_depth_if_closer(point, sample.inv_z) {
                    let intensity = shade(point, sample);
                    self.framebuffer
                        .put_pixel(point, color.scaled(intensity).to_rgba());
                    self.frame_stats.pixels_written += 1;
                }
            }
        }
    }

    /// Draws a line ignoring the depth buffer.
    fn draw_line(&mut self, from: CanvasPoint, to: CanvasPoint, rgba: u32) {
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        if dx.abs() > dy.abs() {
            let (a, b) = if dx < 0 { (to, from) } else { (from, to) };
            let ys = interpolate(a.x, a.y as f32, b.x, b.y as f32);
            for (x, y) in (a.x..=b.x).zip(ys) {
                self.framebuffer
                    .put_pixel(CanvasPoint::new(x, y.round() as i32), rgba);
            }
        } else {
            let (a, b) = if dy < 0 { (to, from) } else { (from, to) };
            let xs = interpolate(a.y, a.x as f32, b.y, b.x as f32);
            for (y, x) in (a.y..=b.y).zip(xs) {
                self.framebuffer
                    .put_pixel(CanvasPoint::new(x.round() as i32, y), rgba);
            }
        }
    }
}
