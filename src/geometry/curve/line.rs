use crate::error::{GeometryError, Result};
use crate::math::{degree_to_radian, Point3, Vector3};

use super::{Curve, CurveDomain};

/// A straight line segment between two points.
///
/// The parametric form is `P(t) = start + t * (end - start)` for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Point3,
    end: Point3,
}

impl Line {
    /// Creates a segment from `start` to `end`. Coincident endpoints are allowed.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Creates a segment of `length` leaving `start` at `degree` degrees from +X.
    ///
    /// The end point keeps the start point's Z.
    #[must_use]
    pub fn from_polar(start: Point3, length: f64, degree: f64) -> Self {
        let theta = degree_to_radian(degree);
        let end = start + Vector3::new(theta.cos(), theta.sin(), 0.0) * length;
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Returns the vector from start to end.
    #[must_use]
    pub fn delta(&self) -> Vector3 {
        self.end - self.start
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Point3 {
        self.start + self.delta() * t
    }

    fn tangent(&self, _t: f64) -> Result<Vector3> {
        self.delta()
            .try_normalize(0.0)
            .ok_or_else(|| GeometryError::ZeroVector.into())
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_are_kept() {
        let line = Line::new(Point3::new(1.0, 2.0, 0.0), Point3::new(4.0, 6.0, 0.0));
        assert_eq!(line.start_point(), Point3::new(1.0, 2.0, 0.0));
        assert_eq!(line.end_point(), Point3::new(4.0, 6.0, 0.0));
        assert_relative_eq!(line.delta().norm(), 5.0);
    }

    #[test]
    fn polar_end_point() {
        let line = Line::from_polar(Point3::new(1.0, 1.0, 2.0), 2.0, 90.0);
        assert_relative_eq!(*line.end(), Point3::new(1.0, 3.0, 2.0), epsilon = 1e-12);

        let line = Line::from_polar(Point3::origin(), 10.0, 210.0);
        let expected = Point3::new(-10.0 * 3.0_f64.sqrt() / 2.0, -5.0, 0.0);
        assert_relative_eq!(*line.end(), expected, epsilon = 1e-12);
    }

    #[test]
    fn polar_negative_length_points_backwards() {
        let line = Line::from_polar(Point3::origin(), -3.0, 0.0);
        assert_relative_eq!(*line.end(), Point3::new(-3.0, 0.0, 0.0));
    }

    #[test]
    fn tangent_is_unit_direction() {
        let line = Line::new(Point3::origin(), Point3::new(0.0, 5.0, 0.0));
        assert_relative_eq!(line.tangent(0.3).unwrap(), Vector3::y());
    }

    #[test]
    fn zero_length_has_no_tangent() {
        let p = Point3::new(1.0, 1.0, 0.0);
        assert!(Line::new(p, p).tangent(0.0).is_err());
    }

    #[test]
    fn midpoint_parameter() {
        let line = Line::new(Point3::origin(), Point3::new(2.0, 4.0, 6.0));
        assert_relative_eq!(line.evaluate(0.5), Point3::new(1.0, 2.0, 3.0));
    }
}
