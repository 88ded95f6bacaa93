use rasterizer::RasterError;

#[derive(thiserror::Error, Debug)]
pub enum ViewerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid scene: {0}")]
    InvalidScene(String),

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("frame buffer does not match a {width}x{height} image")]
    FrameSize { width: u32, height: u32 },
}
