use crate::rasterizer::Color;

/// Granularity at which lighting is evaluated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShadingModel {
    /// Once per triangle, at its centroid.
    Flat,
    /// Once per vertex, intensities interpolated across the triangle.
    Gouraud,
    /// Once per pixel, with interpolated normals.
    Phong,
}

impl Default for ShadingModel {
    fn default() -> Self {
        Self::Phong
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadingConfig {
    pub model: ShadingModel,
    pub diffuse: bool,
    pub specular: bool,
    pub specular_exponent: u32,
    /// Use the per vertex normals of a triangle when present instead of its
    /// geometric normal.
    pub use_vertex_normals: bool,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            model: ShadingModel::default(),
            diffuse: true,
            specular: true,
            specular_exponent: 50,
            use_vertex_normals: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RasterizerConfig {
    pub clear_color: Color,
    pub shading: ShadingConfig,
}

impl Default for RasterizerConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::BLACK,
            shading: ShadingConfig::default(),
        }
    }
}
