use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("invalid viewport {width}x{height}: both dimensions must be non-zero")]
    InvalidViewport { width: u32, height: u32 },

    #[error("failed to allocate buffers for {pixels} pixels")]
    Allocation {
        pixels: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("triangle {triangle} of model '{model}' references vertex {vertex}, but the model has {vertex_count} vertices")]
    InvalidTriangle {
        model: String,
        triangle: usize,
        vertex: usize,
        vertex_count: usize,
    },
}
