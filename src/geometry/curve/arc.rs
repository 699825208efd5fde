use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::{
    angle_to_x_axis, circumcircle_xy, degree_to_radian, distance, is_collinear, Point3, Tolerance,
    Vector3,
};

use super::{Curve, CurveDomain};

/// A circular arc in a plane parallel to XY.
///
/// Runs counter-clockwise from `start_angle` to `end_angle` (radians,
/// measured from the local +X axis at the center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point3,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc from angles in radians.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not strictly positive.
    pub fn new(center: Point3, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        if radius.is_nan() || radius <= 0.0 {
            debug!(radius, "rejected arc radius");
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "radius",
                value: radius,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            end_angle,
        })
    }

    /// Creates an arc from a center, radius, and start/end angles in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not strictly positive.
    pub fn from_degrees(center: Point3, radius: f64, start_degree: f64, end_degree: f64) -> Result<Self> {
        Self::new(
            center,
            radius,
            degree_to_radian(start_degree),
            degree_to_radian(end_degree),
        )
    }

    /// Creates the arc on the circle through three points, from `start` to `end`.
    ///
    /// `through` only selects the circle; the arc always begins at `start`
    /// and finishes at `end`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the points are collinear under `tol`.
    pub fn from_three_points(
        start: &Point3,
        through: &Point3,
        end: &Point3,
        tol: Tolerance,
    ) -> Result<Self> {
        if is_collinear(start, through, end, tol) {
            debug!(?start, ?through, ?end, "rejected arc through collinear points");
            return Err(GeometryError::Degenerate("arc points are collinear".into()).into());
        }
        let (center, radius) = circumcircle_xy(start, through, end)?;
        Self::new(
            center,
            radius,
            angle_to_x_axis(&center, start),
            angle_to_x_axis(&center, end),
        )
    }

    /// Creates an arc starting at `start`, turning `sweep_degree` degrees about `center`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` coincides with `center`.
    pub fn from_center_start_sweep(center: Point3, start: &Point3, sweep_degree: f64) -> Result<Self> {
        let radius = distance(&center, start);
        let start_angle = angle_to_x_axis(&center, start);
        Self::new(
            center,
            radius,
            start_angle,
            start_angle + degree_to_radian(sweep_degree),
        )
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the end angle in radians.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Returns the counter-clockwise angle swept from start to end, in `[0, 2*pi)`.
    #[must_use]
    pub fn included_angle(&self) -> f64 {
        (self.end_angle - self.start_angle).rem_euclid(std::f64::consts::TAU)
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Point3 {
        self.center + Vector3::new(t.cos(), t.sin(), 0.0) * self.radius
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        Ok(Vector3::new(-t.sin(), t.cos(), 0.0))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.end_angle)
    }

    fn is_closed(&self) -> bool {
        (self.end_angle - self.start_angle).abs() >= std::f64::consts::TAU
    }
}
