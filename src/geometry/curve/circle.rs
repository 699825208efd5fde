use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::{circumcircle_xy, distance, is_collinear, midpoint, Point3, Tolerance, Vector3};

use super::{Curve, CurveDomain, Line};

/// A full circle in a plane parallel to XY.
///
/// `P(t) = center + radius * (cos(t), sin(t), 0)` for `t` in `[0, 2*pi)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point3,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not strictly positive.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if radius.is_nan() || radius <= 0.0 {
            debug!(radius, "rejected circle radius");
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "radius",
                value: radius,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(Self { center, radius })
    }

    /// Creates the circle having `p1`-`p2` as a diameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints give a zero radius.
    pub fn from_diameter(p1: &Point3, p2: &Point3) -> Result<Self> {
        let center = midpoint(p1, p2);
        Self::new(center, distance(p1, &center))
    }

    /// Creates the circle whose diameter is the given segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment has zero length.
    pub fn from_line(line: &Line) -> Result<Self> {
        Self::from_diameter(line.start(), line.end())
    }

    /// Creates the circle through three points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the points are collinear under `tol`.
    pub fn from_three_points(p1: &Point3, p2: &Point3, p3: &Point3, tol: Tolerance) -> Result<Self> {
        if is_collinear(p1, p2, p3, tol) {
            debug!(?p1, ?p2, ?p3, "rejected circle through collinear points");
            return Err(GeometryError::Degenerate("circle points are collinear".into()).into());
        }
        let (center, radius) = circumcircle_xy(p1, p2, p3)?;
        Self::new(center, radius)
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Point3 {
        self.center + Vector3::new(t.cos(), t.sin(), 0.0) * self.radius
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        Ok(Vector3::new(-t.sin(), t.cos(), 0.0))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, std::f64::consts::TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
