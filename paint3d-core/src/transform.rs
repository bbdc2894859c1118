/// Point rotation about the coordinate axes, the origin and arbitrary pivots
use nalgebra::{Point3, Rotation3, Vector3};

/// Coordinate axis a single rotation step turns about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Formula used for a single-axis rotation step.
///
/// `Legacy` keeps the axis coordinate and offsets the other two by `sin(angle) * r` and
/// `cos(angle) * r`, where `r` is the distance of the point from the origin. It does not
/// preserve that distance and is not the identity at angle zero. `Matrix` applies the usual
/// right-handed rotation matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationStrategy {
    Legacy,
    #[default]
    Matrix,
}

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotate `point` about one coordinate axis through the origin
pub fn rotate_around_origin_axis(
    point: &Point3<f64>,
    axis: Axis,
    angle: f64,
    strategy: RotationStrategy,
) -> Point3<f64> {
    match strategy {
        RotationStrategy::Legacy => {
            let r = point.coords.norm();
            let (sin, cos) = angle.sin_cos();
            match axis {
                Axis::X => Point3::new(point.x, point.y + sin * r, point.z + cos * r),
                Axis::Y => Point3::new(point.x + cos * r, point.y, point.z + sin * r),
                Axis::Z => Point3::new(point.x + cos * r, point.y + sin * r, point.z),
            }
        }
        RotationStrategy::Matrix => {
            let unit = match axis {
                Axis::X => Vector3::x_axis(),
                Axis::Y => Vector3::y_axis(),
                Axis::Z => Vector3::z_axis(),
            };
            Rotation3::from_axis_angle(&unit, angle) * point
        }
    }
}

/// Rotate about the X axis, then Y, then Z. The order is fixed.
pub fn rotate_around_origin(
    point: &Point3<f64>,
    rotation: &RotationState,
    strategy: RotationStrategy,
) -> Point3<f64> {
    let p = rotate_around_origin_axis(point, Axis::X, rotation.x, strategy);
    let p = rotate_around_origin_axis(&p, Axis::Y, rotation.y, strategy);
    rotate_around_origin_axis(&p, Axis::Z, rotation.z, strategy)
}

/// Rotate `point` about `pivot` in place; `pivot` is left untouched
pub fn rotate_around_point(
    point: &mut Point3<f64>,
    pivot: &Point3<f64>,
    rotation: &RotationState,
    strategy: RotationStrategy,
) {
    let local = Point3::from(*point - pivot);
    let rotated = rotate_around_origin(&local, rotation, strategy);
    *point = rotated + pivot.coords;
}

/// Rotation operations on a point, in both copying and mutating form
pub trait Rotate {
    fn rotated(&self, rotation: &RotationState, strategy: RotationStrategy) -> Self;

    fn rotate_in_place(&mut self, rotation: &RotationState, strategy: RotationStrategy);

    fn rotated_around(
        &self,
        pivot: &Point3<f64>,
        rotation: &RotationState,
        strategy: RotationStrategy,
    ) -> Self;

    fn rotate_around_in_place(
        &mut self,
        pivot: &Point3<f64>,
        rotation: &RotationState,
        strategy: RotationStrategy,
    );
}

impl Rotate for Point3<f64> {
    fn rotated(&self, rotation: &RotationState, strategy: RotationStrategy) -> Self {
        rotate_around_origin(self, rotation, strategy)
    }

    fn rotate_in_place(&mut self, rotation: &RotationState, strategy: RotationStrategy) {
        *self = rotate_around_origin(self, rotation, strategy);
    }

    fn rotated_around(
        &self,
        pivot: &Point3<f64>,
        rotation: &RotationState,
        strategy: RotationStrategy,
    ) -> Self {
        let mut point = *self;
        rotate_around_point(&mut point, pivot, rotation, strategy);
        point
    }

    fn rotate_around_in_place(
        &mut self,
        pivot: &Point3<f64>,
        rotation: &RotationState,
        strategy: RotationStrategy,
    ) {
        rotate_around_point(self, pivot, rotation, strategy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert!(state.is_zero());

        state.rotate(0.1, 0.2, 0.3);
        assert_relative_eq!(state.x, 0.1);
        assert_relative_eq!(state.y, 0.2);
        assert_relative_eq!(state.z, 0.3);
    }

    #[test]
    fn test_identity_rotation() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, -2.0, 3.5),
            Point3::new(-7.25, 0.5, -0.125),
        ];
        for p in points {
            let r = p.rotated(&RotationState::zero(), RotationStrategy::Matrix);
            assert_relative_eq!(r, p, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_matrix_quarter_turns() {
        let p = Point3::new(0.0, 1.0, 0.0);
        let r = rotate_around_origin_axis(&p, Axis::X, FRAC_PI_2, RotationStrategy::Matrix);
        assert_relative_eq!(r, Point3::new(0.0, 0.0, 1.0), epsilon = 1e-12);

        let p = Point3::new(1.0, 0.0, 0.0);
        let r = rotate_around_origin_axis(&p, Axis::Z, FRAC_PI_2, RotationStrategy::Matrix);
        assert_relative_eq!(r, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);

        let p = Point3::new(0.0, 0.0, 1.0);
        let r = rotate_around_origin_axis(&p, Axis::Y, FRAC_PI_2, RotationStrategy::Matrix);
        assert_relative_eq!(r, Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_matrix_preserves_distance() {
        let p = Point3::new(1.5, -2.0, 0.75);
        let r = p.rotated(&RotationState::new(0.3, -1.1, 2.4), RotationStrategy::Matrix);
        assert_relative_eq!(r.coords.norm(), p.coords.norm(), epsilon = 1e-12);
    }

    #[test]
    fn test_legacy_axis_offsets() {
        // r = 3 for (1, 2, 2)
        let p = Point3::new(1.0, 2.0, 2.0);
        let angle = 0.4_f64;
        let (sin, cos) = angle.sin_cos();

        let x = rotate_around_origin_axis(&p, Axis::X, angle, RotationStrategy::Legacy);
        assert_relative_eq!(x, Point3::new(1.0, 2.0 + 3.0 * sin, 2.0 + 3.0 * cos));

        let y = rotate_around_origin_axis(&p, Axis::Y, angle, RotationStrategy::Legacy);
        assert_relative_eq!(y, Point3::new(1.0 + 3.0 * cos, 2.0, 2.0 + 3.0 * sin));

        let z = rotate_around_origin_axis(&p, Axis::Z, angle, RotationStrategy::Legacy);
        assert_relative_eq!(z, Point3::new(1.0 + 3.0 * cos, 2.0 + 3.0 * sin, 2.0));
    }

    #[test]
    fn test_legacy_zero_angle_is_not_identity() {
        let p = Point3::new(0.0, 0.0, 1.0);
        let r = rotate_around_origin_axis(&p, Axis::X, 0.0, RotationStrategy::Legacy);
        assert_relative_eq!(r, Point3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_origin_rotation_order_is_x_then_y_then_z() {
        let p = Point3::new(0.3, -0.4, 1.2);
        let rotation = RotationState::new(0.5, 0.7, -0.2);
        for strategy in [RotationStrategy::Legacy, RotationStrategy::Matrix] {
            let step = rotate_around_origin_axis(&p, Axis::X, rotation.x, strategy);
            let step = rotate_around_origin_axis(&step, Axis::Y, rotation.y, strategy);
            let step = rotate_around_origin_axis(&step, Axis::Z, rotation.z, strategy);
            assert_relative_eq!(p.rotated(&rotation, strategy), step);
        }
    }

    #[test]
    fn test_pivot_decomposition() {
        let p = Point3::new(2.0, 1.0, -3.0);
        let pivot = Point3::new(-1.0, 4.0, 0.5);
        let rotation = RotationState::new(0.9, -0.35, 1.7);

        for strategy in [RotationStrategy::Legacy, RotationStrategy::Matrix] {
            let mut direct = p;
            rotate_around_point(&mut direct, &pivot, &rotation, strategy);

            let local = Point3::from(p - pivot);
            let expected = rotate_around_origin(&local, &rotation, strategy) + pivot.coords;
            assert_relative_eq!(direct, expected, epsilon = 1e-12);
            assert_relative_eq!(p.rotated_around(&pivot, &rotation, strategy), direct);
        }
    }

    #[test]
    fn test_in_place_matches_copy() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let rotation = RotationState::new(0.1, 0.2, 0.3);

        let mut q = p;
        q.rotate_in_place(&rotation, RotationStrategy::Legacy);
        assert_relative_eq!(q, p.rotated(&rotation, RotationStrategy::Legacy));

        let pivot = Point3::new(0.0, 0.0, 1.0);
        let mut q = p;
        q.rotate_around_in_place(&pivot, &rotation, RotationStrategy::Matrix);
        assert_relative_eq!(q, p.rotated_around(&pivot, &rotation, RotationStrategy::Matrix));
    }

    #[test]
    fn test_pivot_is_fixed_point() {
        let pivot = Point3::new(3.0, -2.0, 5.0);
        let r = pivot.rotated_around(&pivot, &RotationState::new(1.0, 2.0, 3.0), RotationStrategy::Matrix);
        assert_relative_eq!(r, pivot, epsilon = 1e-12);
    }
}
