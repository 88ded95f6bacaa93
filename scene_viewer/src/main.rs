mod error;
mod scene;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use image::{ImageBuffer, Rgba};
use log::{debug, info};
use rasterizer::{Rasterizer, RasterizerConfig, ShadingConfig, ShadingModel};

use error::ViewerError;
use scene::SceneDescription;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Shading {
    Flat,
    Gouraud,
    Phong,
}

impl From<Shading> for ShadingModel {
    fn from(shading: Shading) -> Self {
        match shading {
            Shading::Flat => ShadingModel::Flat,
            Shading::Gouraud => ShadingModel::Gouraud,
            Shading::Phong => ShadingModel::Phong,
        }
    }
}

/// Renders a scene of cubes and spheres and writes the last frame to a PNG.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Horizontal field of view in degrees, overrides the scene camera.
    #[arg(long)]
    fov: Option<f32>,

    #[arg(long, value_enum, default_value_t = Shading::Phong)]
    shading: Shading,

    #[arg(long)]
    no_diffuse: bool,

    #[arg(long)]
    no_specular: bool,

    #[arg(long, default_value_t = 50)]
    specular_exponent: u32,

    /// Shade with geometric normals only.
    #[arg(long)]
    no_vertex_normals: bool,

    /// Draw triangle outlines on every instance.
    #[arg(long)]
    outlines: bool,

    /// Number of frames to render before writing the output.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// TOML scene description. The built in demo scene is used when absent.
    #[arg(long)]
    scene: Option<PathBuf>,

    #[arg(long, default_value = "frame.png")]
    output: PathBuf,
}

impl Args {
    fn rasterizer_config(&self) -> RasterizerConfig {
        RasterizerConfig {
            shading: ShadingConfig {
                model: self.shading.into(),
                diffuse: !self.no_diffuse,
                specular: !self.no_specular,
                specular_exponent: self.specular_exponent,
                use_vertex_normals: !self.no_vertex_normals,
            },
            ..Default::default()
        }
    }
}

fn main() -> Result<(), ViewerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    debug!("{:?}", args);

    let mut description = match &args.scene {
        Some(path) => {
            info!("loading scene from {}", path.display());
            SceneDescription::load(path)?
        }
        None => SceneDescription::demo(),
    };
    if let Some(fov) = args.fov {
        description.camera.fov = fov;
    }

    let mut scene = description.build(args.width, args.height, args.outlines)?;
    let mut rasterizer = Rasterizer::new(args.width, args.height, args.rasterizer_config())?;

    for frame in 0..args.frames.max(1) {
        rasterizer.render(&scene.camera, &mut scene.instances, &scene.lights);
        let stats = rasterizer.frame_stats();
        let triangles: usize = scene.instances.iter().map(|i| i.triangles_rendered()).sum();
        info!(
            "frame {}: {:?} ({:?} geometry, {:?} raster), {} triangles, {} culled, {} pixels",
            frame,
            stats.total(),
            stats.geometry_stage(),
            stats.rasterization_stage(),
            triangles,
            stats.triangles_culled(),
            stats.pixels_written()
        );
    }

    let (width, height) = (rasterizer.width(), rasterizer.height());
    let bytes: Vec<u8> = rasterizer
        .front_buffer()
        .iter()
        .flat_map(|rgba| rgba.to_le_bytes())
        .collect();
    let image = ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, bytes)
        .ok_or(ViewerError::FrameSize { width, height })?;
    image.save(&args.output)?;
    info!("wrote {}x{} frame to {}", width, height, args.output.display());

    Ok(())
}
