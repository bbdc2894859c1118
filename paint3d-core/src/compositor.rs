/// Painter's-algorithm compositing onto a turtle-style drawing surface
use std::io;

use log::{debug, trace};
use nalgebra::Point2;

use crate::color::Color;
use crate::config::RenderConfig;
use crate::draw::{DrawList, DrawRequest};
use crate::error::Result;

/// Pen-and-fill drawing primitives the compositor drives.
///
/// Coordinates are in drawing-plane units with the origin at the center and y pointing up.
pub trait DrawingSurface {
    fn set_pen_width(&mut self, width: f64) -> io::Result<()>;
    fn set_pen_color(&mut self, color: Color) -> io::Result<()>;
    /// Stop drawing on subsequent moves
    fn pen_up(&mut self) -> io::Result<()>;
    /// Draw on subsequent moves
    fn pen_down(&mut self) -> io::Result<()>;
    fn goto(&mut self, point: Point2<f64>) -> io::Result<()>;
    fn set_fill_color(&mut self, color: Color) -> io::Result<()>;
    fn begin_fill(&mut self) -> io::Result<()>;
    /// Close the region opened by `begin_fill` and paint it
    fn end_fill(&mut self) -> io::Result<()>;
}

/// Drain `list` and draw every request furthest first
pub fn composite<S: DrawingSurface + ?Sized>(
    list: &mut DrawList,
    surface: &mut S,
    config: &RenderConfig,
) -> Result<usize> {
    let requests = list.drain_sorted();
    debug!("compositing {} draw requests", requests.len());

    for request in &requests {
        draw_request(request, surface, config.outline_width)?;
    }

    Ok(requests.len())
}

/// Outline pass followed by fill pass for a single request
pub fn draw_request<S: DrawingSurface + ?Sized>(
    request: &DrawRequest,
    surface: &mut S,
    outline_width: f64,
) -> Result<()> {
    let Some(&start) = request.polygon.first() else {
        return Ok(());
    };
    trace!(
        "drawing {} points at depth {}",
        request.polygon.len(),
        request.depth
    );

    surface.set_pen_width(outline_width)?;
    surface.set_pen_color(request.outline)?;
    surface.pen_up()?;
    surface.goto(start)?;
    surface.pen_down()?;
    for &point in &request.polygon {
        surface.goto(point)?;
    }

    surface.pen_up()?;
    surface.goto(start)?;
    surface.set_fill_color(request.fill)?;
    surface.begin_fill()?;
    for &point in &request.polygon {
        surface.goto(point)?;
    }
    surface.goto(start)?;
    surface.end_fill()?;

    Ok(())
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    PenWidth(f64),
    PenColor(Color),
    PenUp,
    PenDown,
    Goto(Point2<f64>),
    FillColor(Color),
    BeginFill,
    EndFill,
}

/// Surface that records calls instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill colors in the order their regions were closed
    pub fn filled_colors(&self) -> Vec<Color> {
        let mut current = None;
        let mut filled = Vec::new();
        for call in &self.calls {
            match call {
                SurfaceCall::FillColor(color) => current = Some(*color),
                SurfaceCall::EndFill => filled.extend(current),
                _ => {}
            }
        }
        filled
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_pen_width(&mut self, width: f64) -> io::Result<()> {
        self.calls.push(SurfaceCall::PenWidth(width));
        Ok(())
    }

    fn set_pen_color(&mut self, color: Color) -> io::Result<()> {
        self.calls.push(SurfaceCall::PenColor(color));
        Ok(())
    }

    fn pen_up(&mut self) -> io::Result<()> {
        self.calls.push(SurfaceCall::PenUp);
        Ok(())
    }

    fn pen_down(&mut self) -> io::Result<()> {
        self.calls.push(SurfaceCall::PenDown);
        Ok(())
    }

    fn goto(&mut self, point: Point2<f64>) -> io::Result<()> {
        self.calls.push(SurfaceCall::Goto(point));
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> io::Result<()> {
        self.calls.push(SurfaceCall::FillColor(color));
        Ok(())
    }

    fn begin_fill(&mut self) -> io::Result<()> {
        self.calls.push(SurfaceCall::BeginFill);
        Ok(())
    }

    fn end_fill(&mut self) -> io::Result<()> {
        self.calls.push(SurfaceCall::EndFill);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn triangle(depth: f64, fill: Color) -> DrawRequest {
        DrawRequest {
            polygon: vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(0.0, 10.0),
            ],
            depth,
            fill,
            outline: Color::WHITE,
        }
    }

    #[test]
    fn test_draw_protocol() {
        let request = triangle(1.0, Color::BLUE);
        let mut surface = RecordingSurface::new();
        draw_request(&request, &mut surface, 10.0).unwrap();

        let a = SurfaceCall::Goto(Point2::new(0.0, 0.0));
        let b = SurfaceCall::Goto(Point2::new(10.0, 0.0));
        let c = SurfaceCall::Goto(Point2::new(0.0, 10.0));
        assert_eq!(
            surface.calls,
            vec![
                SurfaceCall::PenWidth(10.0),
                SurfaceCall::PenColor(Color::WHITE),
                SurfaceCall::PenUp,
                a.clone(),
                SurfaceCall::PenDown,
                a.clone(),
                b.clone(),
                c.clone(),
                SurfaceCall::PenUp,
                a.clone(),
                SurfaceCall::FillColor(Color::BLUE),
                SurfaceCall::BeginFill,
                a.clone(),
                b,
                c,
                a,
                SurfaceCall::EndFill,
            ]
        );
    }

    #[test]
    fn test_composite_orders_and_drains() {
        let near = Color::rgb(0, 255, 0);
        let middle = Color::rgb(0, 0, 255);
        let far = Color::rgb(255, 0, 0);

        let mut list = DrawList::new();
        list.push(triangle(1.0, near));
        list.push(triangle(9.0, far));
        list.push(triangle(4.0, middle));

        let mut surface = RecordingSurface::new();
        let drawn = composite(&mut list, &mut surface, &RenderConfig::default()).unwrap();

        assert_eq!(drawn, 3);
        assert!(list.is_empty());
        assert_eq!(surface.filled_colors(), vec![far, middle, near]);
    }

    #[test]
    fn test_outline_width_comes_from_config() {
        let mut list = DrawList::new();
        list.push(triangle(1.0, Color::BLUE));
        let mut surface = RecordingSurface::new();
        let config = RenderConfig::default().with_outline_width(3.0);
        composite(&mut list, &mut surface, &config).unwrap();
        assert_eq!(surface.calls[0], SurfaceCall::PenWidth(3.0));
    }

    #[test]
    fn test_empty_polygon_draws_nothing() {
        let request = DrawRequest {
            polygon: Vec::new(),
            depth: 0.0,
            fill: Color::BLUE,
            outline: Color::WHITE,
        };
        let mut surface = RecordingSurface::new();
        draw_request(&request, &mut surface, 10.0).unwrap();
        assert!(surface.calls.is_empty());
    }

    struct BrokenSurface;

    impl DrawingSurface for BrokenSurface {
        fn set_pen_width(&mut self, _width: f64) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn set_pen_color(&mut self, _color: Color) -> io::Result<()> {
            Ok(())
        }
        fn pen_up(&mut self) -> io::Result<()> {
            Ok(())
        }
        fn pen_down(&mut self) -> io::Result<()> {
            Ok(())
        }
        fn goto(&mut self, _point: Point2<f64>) -> io::Result<()> {
            Ok(())
        }
        fn set_fill_color(&mut self, _color: Color) -> io::Result<()> {
            Ok(())
        }
        fn begin_fill(&mut self) -> io::Result<()> {
            Ok(())
        }
        fn end_fill(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_surface_errors_propagate() {
        let mut list = DrawList::new();
        list.push(triangle(1.0, Color::BLUE));
        let result = composite(&mut list, &mut BrokenSurface, &RenderConfig::default());
        assert!(matches!(result, Err(Error::Surface(_))));
    }
}
