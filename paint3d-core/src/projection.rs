/// Perspective projection from world space onto the drawing plane
use log::warn;
use nalgebra::{Point2, Point3};

use crate::config::RenderConfig;

/// Projection mode selected for a given depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

/// Fixed-divisor perspective projection.
///
/// A point on the `z == 0` plane is passed through unchanged. Anywhere else both
/// coordinates are scaled by `focal_length / (z + signum(z) * epsilon)`; the epsilon only
/// nudges the divisor away from zero, it does not clip. Points very close to the plane
/// still land far from the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub focal_length: f64,
    pub epsilon: f64,
}

impl Projection {
    pub const DEFAULT_FOCAL_LENGTH: f64 = 200.0;
    pub const DEFAULT_EPSILON: f64 = 1e-16;

    pub fn new(focal_length: f64, epsilon: f64) -> Self {
        Self {
            focal_length,
            epsilon,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.focal_length, config.epsilon)
    }

    pub fn mode(z: f64) -> ProjectionMode {
        if z == 0.0 {
            ProjectionMode::Orthographic
        } else {
            ProjectionMode::Perspective
        }
    }

    /// Scale applied to x and y, or `None` on the orthographic plane
    pub fn factor(&self, z: f64) -> Option<f64> {
        match Self::mode(z) {
            ProjectionMode::Orthographic => None,
            ProjectionMode::Perspective => {
                Some(self.focal_length / (z + z.signum() * self.epsilon))
            }
        }
    }

    /// Project a 3D point onto the 2D drawing plane
    pub fn project(&self, point: &Point3<f64>) -> Point2<f64> {
        match self.factor(point.z) {
            None => Point2::new(point.x, point.y),
            Some(factor) => {
                if !factor.is_finite() {
                    warn!("non-finite projection factor for {:?}", point);
                }
                Point2::new(point.x * factor, point.y * factor)
            }
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FOCAL_LENGTH, Self::DEFAULT_EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_origin_projects_to_origin() {
        let p = Projection::default().project(&Point3::new(0.0, 0.0, 0.0));
        assert_eq!(p, Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_zero_depth_is_orthographic() {
        assert_eq!(Projection::mode(0.0), ProjectionMode::Orthographic);
        assert_eq!(Projection::mode(-0.0), ProjectionMode::Orthographic);

        let p = Projection::default().project(&Point3::new(3.5, -1.25, 0.0));
        assert_eq!(p, Point2::new(3.5, -1.25));
    }

    #[test]
    fn test_perspective_divides_by_depth() {
        let p = Projection::default().project(&Point3::new(1.0, -2.0, 2.0));
        assert_relative_eq!(p.x, 100.0);
        assert_relative_eq!(p.y, -200.0);
    }

    #[test]
    fn test_factor_sign_follows_depth() {
        let projection = Projection::default();
        let front = projection.factor(4.0).unwrap();
        let back = projection.factor(-4.0).unwrap();
        assert!(front > 0.0);
        assert!(back < 0.0);
        assert_relative_eq!(front, -back);

        let a = projection.project(&Point3::new(1.0, 2.0, 4.0));
        let b = projection.project(&Point3::new(1.0, 2.0, -4.0));
        assert_relative_eq!(a.x, -b.x);
        assert_relative_eq!(a.y, -b.y);
    }

    #[test]
    fn test_near_plane_is_not_clipped() {
        let projection = Projection::default();
        let p = projection.project(&Point3::new(1.0, 1.0, 1e-12));
        assert!(p.x.is_finite());
        assert!(p.x > 1e12);
    }

    #[test]
    fn test_custom_focal_length() {
        let projection = Projection::new(50.0, 0.0);
        let p = projection.project(&Point3::new(2.0, 4.0, 10.0));
        assert_relative_eq!(p, Point2::new(10.0, 20.0));
    }
}
