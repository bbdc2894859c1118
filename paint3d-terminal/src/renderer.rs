/// Cell-buffer canvas that rasterizes turtle-style pen strokes and fills for the terminal
use std::io::{self, Write};

use crossterm::{
    style::{self, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use log::trace;
use nalgebra::Point2;
use paint3d_core::{Color, DrawingSurface};

use crate::CanvasConfig;

/// Character used for every painted cell
const CELL_CHAR: char = '█';

/// Terminal canvas with the drawing-plane origin at its center and y pointing up
pub struct TerminalCanvas {
    width: usize,
    height: usize,
    /// Cells per drawing-plane unit along x and y
    scale_x: f64,
    scale_y: f64,
    cells: Vec<Color>,
    background: Color,
    position: Point2<f64>,
    pen_down: bool,
    pen_width: f64,
    pen_color: Color,
    fill_color: Color,
    fill_path: Option<Vec<Point2<f64>>>,
}

impl TerminalCanvas {
    pub fn new(config: &CanvasConfig) -> Self {
        let width = config.columns.max(1);
        let height = config.rows.max(1);
        Self {
            width,
            height,
            scale_x: width as f64 / config.world_width,
            scale_y: height as f64 / config.world_height,
            cells: vec![config.background; width * height],
            background: config.background,
            position: Point2::origin(),
            pen_down: true,
            pen_width: 1.0,
            pen_color: Color::BLACK,
            fill_color: Color::BLACK,
            fill_path: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = self.background;
        }
        self.position = Point2::origin();
        self.fill_path = None;
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<Color> {
        if column < self.width && row < self.height {
            Some(self.cells[row * self.width + column])
        } else {
            None
        }
    }

    /// Drawing-plane point to fractional cell coordinates
    fn to_cell(&self, point: Point2<f64>) -> (f64, f64) {
        (
            point.x * self.scale_x + self.width as f64 / 2.0,
            self.height as f64 / 2.0 - point.y * self.scale_y,
        )
    }

    fn paint(&mut self, column: i64, row: i64, color: Color) {
        if column >= 0 && row >= 0 && (column as usize) < self.width && (row as usize) < self.height {
            self.cells[row as usize * self.width + column as usize] = color;
        }
    }

    fn stamp(&mut self, x: f64, y: f64) {
        let rx = (self.pen_width / 2.0 * self.scale_x).floor() as i64;
        let ry = (self.pen_width / 2.0 * self.scale_y).floor() as i64;
        let (cx, cy) = (x.floor() as i64, y.floor() as i64);
        for row in cy - ry..=cy + ry {
            for column in cx - rx..=cx + rx {
                self.paint(column, row, self.pen_color);
            }
        }
    }

    fn stroke(&mut self, from: Point2<f64>, to: Point2<f64>) {
        let (x0, y0) = self.to_cell(from);
        let (x1, y1) = self.to_cell(to);
        let margin = (self.pen_width / 2.0 * self.scale_x.max(self.scale_y)).ceil() + 1.0;
        let bounds = (
            -margin,
            -margin,
            self.width as f64 + margin,
            self.height as f64 + margin,
        );

        let Some((x0, y0, x1, y1)) = clip_segment(x0, y0, x1, y1, bounds) else {
            return;
        };

        let steps = ((x1 - x0).abs().max((y1 - y0).abs()) * 2.0).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            self.stamp(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t);
        }
    }

    /// Even-odd scanline fill of a closed polygon
    fn fill_polygon(&mut self, polygon: &[Point2<f64>]) {
        if polygon.len() < 3 {
            return;
        }
        let points: Vec<(f64, f64)> = polygon.iter().map(|&p| self.to_cell(p)).collect();

        for row in 0..self.height {
            let y = row as f64 + 0.5;
            let mut crossings: Vec<f64> = Vec::new();
            for (i, &(ax, ay)) in points.iter().enumerate() {
                let (bx, by) = points[(i + 1) % points.len()];
                if (ay <= y) != (by <= y) {
                    crossings.push(ax + (y - ay) / (by - ay) * (bx - ax));
                }
            }
            crossings.retain(|x| x.is_finite());
            crossings.sort_by(f64::total_cmp);

            for pair in crossings.chunks_exact(2) {
                let start = (pair[0] - 0.5).ceil().max(0.0);
                let end = (pair[1] - 0.5).floor().min(self.width as f64 - 1.0);
                if start > end {
                    continue;
                }
                for column in start as usize..=end as usize {
                    self.cells[row * self.width + column] = self.fill_color;
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for y in 0..self.height {
            let mut current = None;
            for x in 0..self.width {
                let color = self.cells[y * self.width + x];
                if current != Some(color) {
                    writer.queue(SetForegroundColor(to_terminal_color(color)))?;
                    current = Some(color);
                }
                writer.queue(Print(CELL_CHAR))?;
            }
            writer.queue(ResetColor)?;
            writer.queue(Print('\n'))?;
        }
        Ok(())
    }
}

impl DrawingSurface for TerminalCanvas {
    fn set_pen_width(&mut self, width: f64) -> io::Result<()> {
        self.pen_width = width;
        Ok(())
    }

    fn set_pen_color(&mut self, color: Color) -> io::Result<()> {
        self.pen_color = color;
        Ok(())
    }

    fn pen_up(&mut self) -> io::Result<()> {
        self.pen_down = false;
        Ok(())
    }

    fn pen_down(&mut self) -> io::Result<()> {
        self.pen_down = true;
        Ok(())
    }

    fn goto(&mut self, point: Point2<f64>) -> io::Result<()> {
        if self.pen_down {
            self.stroke(self.position, point);
        }
        if let Some(path) = self.fill_path.as_mut() {
            path.push(point);
        }
        self.position = point;
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> io::Result<()> {
        self.fill_color = color;
        Ok(())
    }

    fn begin_fill(&mut self) -> io::Result<()> {
        self.fill_path = Some(vec![self.position]);
        Ok(())
    }

    fn end_fill(&mut self) -> io::Result<()> {
        let Some(path) = self.fill_path.take() else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "end_fill without begin_fill",
            ));
        };
        trace!("filling {} points", path.len());
        self.fill_polygon(&path);
        Ok(())
    }
}

pub fn to_terminal_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Liang-Barsky clip of a segment against `(min_x, min_y, max_x, max_y)`
fn clip_segment(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    bounds: (f64, f64, f64, f64),
) -> Option<(f64, f64, f64, f64)> {
    let (min_x, min_y, max_x, max_y) = bounds;
    let (dx, dy) = (x1 - x0, y1 - y0);
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-dx, x0 - min_x),
        (dx, max_x - x0),
        (-dy, y0 - min_y),
        (dy, max_y - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
        }
    }

    if t0 > t1 || !t0.is_finite() || !t1.is_finite() {
        return None;
    }
    Some((x0 + dx * t0, y0 + dy * t0, x0 + dx * t1, y0 + dy * t1))
}
