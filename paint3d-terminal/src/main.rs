/// paint3d Terminal Demo - Reference Cube
///
/// Renders a blue cube with a white outline, one unit behind the drawing plane, and prints
/// the frame to stdout.
/// Usage:
///   paint3d-terminal [AX AY AZ] [--legacy] [--fill COLOR] [--outline COLOR]
///
/// Angles are in radians. `--legacy` selects the legacy offset rotation formula.
/// Set RUST_LOG=debug to see pipeline logging on stderr.

use std::env;
use std::process;

use log::{error, info};
use nalgebra::Point3;
use paint3d_core::{
    Color, RenderConfig, RenderableObject, RotationState, RotationStrategy, Scene,
};
use paint3d_terminal::{present_stdout, CanvasConfig};

struct Options {
    rotation: RotationState,
    strategy: RotationStrategy,
    fill: Color,
    outline: Color,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        rotation: RotationState::zero(),
        strategy: RotationStrategy::Matrix,
        fill: Color::BLUE,
        outline: Color::WHITE,
    };
    let mut angles = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--legacy" => options.strategy = RotationStrategy::Legacy,
            "--fill" | "--outline" => {
                let spec = iter
                    .next()
                    .ok_or_else(|| format!("{} needs a color", arg))?;
                let color = spec.parse::<Color>().map_err(|e| e.to_string())?;
                if arg == "--fill" {
                    options.fill = color;
                } else {
                    options.outline = color;
                }
            }
            angle => angles.push(
                angle
                    .parse::<f64>()
                    .map_err(|e| format!("invalid angle {:?}: {}", angle, e))?,
            ),
        }
    }

    match angles.as_slice() {
        [] => {}
        [ax, ay, az] => options.rotation = RotationState::new(*ax, *ay, *az),
        _ => return Err(format!("expected 0 or 3 angles, got {}", angles.len())),
    }

    Ok(options)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: paint3d-terminal [AX AY AZ] [--legacy] [--fill COLOR] [--outline COLOR]");
            process::exit(2);
        }
    };

    let cube = RenderableObject::cube(
        1.0,
        Point3::new(0.0, 0.0, 1.0),
        options.fill,
        options.outline,
    )
    .with_rotation(options.rotation);

    let mut scene = Scene::new(RenderConfig::default().with_rotation(options.strategy));
    scene.add(cube);

    info!(
        "rendering cube rotated by {:?} ({:?} rotation)",
        options.rotation, options.strategy
    );
    if let Err(e) = present_stdout(&scene, &CanvasConfig::from_terminal()) {
        error!("render failed: {}", e);
        process::exit(1);
    }
}
