/// Frame rendering benchmarks over a small scene of cubes and spheres.
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use rasterizer::{
    shapes, Camera, CameraPose, Color, Instance, Light, Pose, Rasterizer, RasterizerConfig,
    ShadingConfig, ShadingModel,
};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn scene() -> (Camera, Vec<Instance>, Vec<Light>) {
    let mut camera = Camera::new(WIDTH, HEIGHT, 90.0);
    camera.set_pose(CameraPose {
        position: Vec3::new(-3.0, 1.0, 2.0),
        yaw: 30.0,
        pitch: 0.0,
        roll: 0.0,
    });

    let cube = Arc::new(shapes::cube().unwrap());
    let sphere = Arc::new(shapes::sphere(15, Color::GREEN).unwrap());
    let instances = vec![
        Instance::new(
            cube.clone(),
            Pose {
                scale: 0.75,
                ..Pose::at(Vec3::new(-1.5, 0.0, 7.0))
            },
        ),
        Instance::new(
            cube,
            Pose {
                yaw: 195.0,
                ..Pose::at(Vec3::new(1.25, 2.5, 7.5))
            },
        ),
        Instance::new(
            sphere,
            Pose {
                scale: 1.5,
                ..Pose::at(Vec3::new(1.75, -0.5, 7.0))
            },
        ),
    ];

    let lights = vec![
        Light::ambient(0.2),
        Light::directional(0.2, Vec3::new(-1.0, 0.0, 1.0)),
        Light::point(0.6, Vec3::new(-3.0, 2.0, -10.0)),
    ];
    (camera, instances, lights)
}

fn bench_shading_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let (camera, mut instances, lights) = scene();

    for model in [ShadingModel::Flat, ShadingModel::Gouraud, ShadingModel::Phong].iter() {
        let config = RasterizerConfig {
            shading: ShadingConfig {
                model: *model,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut rasterizer = Rasterizer::new(WIDTH, HEIGHT, config).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(format!("{:?}", model)), model, |b, _| {
            b.iter(|| {
                black_box(rasterizer.render(&camera, &mut instances, &lights));
            });
        });
    }

    group.finish();
}

fn bench_outlines(c: &mut Criterion) {
    c.bench_function("render_frame_outlined", |b| {
        let (camera, mut instances, lights) = scene();
        for instance in instances.iter_mut() {
            instance.set_draw_outlines(true);
        }
        let mut rasterizer =
            Rasterizer::new(WIDTH, HEIGHT, RasterizerConfig::default()).unwrap();
        b.iter(|| {
            black_box(rasterizer.render(&camera, &mut instances, &lights));
        });
    });
}

fn bench_sphere_tessellation(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_divisions");
    let camera = Camera::new(WIDTH, HEIGHT, 90.0);
    let lights = vec![Light::ambient(0.2), Light::point(0.8, Vec3::new(0.0, 2.0, 0.0))];

    for divisions in [8usize, 16, 32, 64].iter() {
        let sphere = Arc::new(shapes::sphere(*divisions, Color::WHITE).unwrap());
        let mut instances = vec![Instance::at(sphere, Vec3::new(0.0, 0.0, 3.0))];
        let mut rasterizer =
            Rasterizer::new(WIDTH, HEIGHT, RasterizerConfig::default()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(divisions), divisions, |b, _| {
            b.iter(|| {
                black_box(rasterizer.render(&camera, &mut instances, &lights));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_shading_models,
    bench_outlines,
    bench_sphere_tessellation
);
criterion_main!(benches);
