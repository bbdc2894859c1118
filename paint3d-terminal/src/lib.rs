/// Terminal front end: draws a paint3d scene into a colored cell grid
use std::io::{self, Write};

use crossterm::terminal;
use log::{debug, warn};
use paint3d_core::{Color, Scene};

pub mod renderer;

pub use renderer::TerminalCanvas;

/// Canvas geometry and the part of the drawing plane it shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    pub columns: usize,
    pub rows: usize,
    /// Drawing-plane extent mapped onto the full width and height
    pub world_width: f64,
    pub world_height: f64,
    pub background: Color,
}

impl CanvasConfig {
    pub const DEFAULT_COLUMNS: usize = 80;
    pub const DEFAULT_ROWS: usize = 24;

    /// Size the canvas to the current terminal, falling back to 80x24
    pub fn from_terminal() -> Self {
        let mut config = Self::default();
        match terminal::size() {
            Ok((columns, rows)) => {
                config.columns = columns as usize;
                // keep the last row free for the prompt
                config.rows = (rows as usize).saturating_sub(1).max(1);
            }
            Err(e) => warn!("could not query terminal size, using defaults: {}", e),
        }
        config
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            columns: Self::DEFAULT_COLUMNS,
            rows: Self::DEFAULT_ROWS,
            world_width: 800.0,
            world_height: 600.0,
            background: Color::BLACK,
        }
    }
}

/// Render one frame of `scene` and write it to `out`. Returns the number of faces drawn.
pub fn present<W: Write>(
    scene: &Scene,
    canvas_config: &CanvasConfig,
    out: &mut W,
) -> paint3d_core::Result<usize> {
    let mut canvas = TerminalCanvas::new(canvas_config);
    let drawn = scene.draw(&mut canvas)?;
    debug!(
        "drew {} faces onto a {}x{} canvas",
        drawn,
        canvas.width(),
        canvas.height()
    );

    canvas.draw(out)?;
    out.flush()?;
    Ok(drawn)
}

/// Convenience wrapper around [`present`] for stdout
pub fn present_stdout(scene: &Scene, canvas_config: &CanvasConfig) -> paint3d_core::Result<usize> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    present(scene, canvas_config, &mut lock)
}
