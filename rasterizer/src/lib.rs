pub mod rasterizer;
pub mod shapes;

pub use rasterizer::*;
pub use rasterizer_macros::Lerp;

pub mod math_prelude {
    pub use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};
}
