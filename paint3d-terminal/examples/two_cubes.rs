/// Example: composite two overlapping cubes in one cycle
///
/// Usage: cargo run --example two_cubes -- [--legacy]

use std::env;
use std::io;

use nalgebra::Point3;
use paint3d_core::{Color, RenderConfig, RenderableObject, RotationState, RotationStrategy, Scene};
use paint3d_terminal::{present_stdout, CanvasConfig};

fn main() -> io::Result<()> {
    env_logger::init();

    let strategy = if env::args().any(|arg| arg == "--legacy") {
        RotationStrategy::Legacy
    } else {
        RotationStrategy::Matrix
    };

    let mut scene = Scene::new(RenderConfig::default().with_rotation(strategy));
    scene
        .add(
            RenderableObject::cube(1.0, Point3::new(-1.0, 0.0, 4.0), Color::BLUE, Color::WHITE)
                .with_rotation(RotationState::new(0.4, 0.6, 0.0)),
        )
        .add(
            RenderableObject::cube(
                0.75,
                Point3::new(1.0, 0.5, 3.0),
                Color::rgb(255, 165, 0),
                Color::BLACK,
            )
            .with_rotation(RotationState::new(-0.3, 0.2, 0.5)),
        );

    let drawn = present_stdout(&scene, &CanvasConfig::from_terminal())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    eprintln!("Drew {} faces", drawn);
    Ok(())
}
