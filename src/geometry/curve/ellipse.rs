use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::{degree_to_radian, distance, midpoint, Point3, Vector3};

use super::{Curve, CurveDomain};

/// An ellipse (or elliptical arc) in a plane parallel to XY.
///
/// Defined by a center, a major-axis vector whose length is the semi-major
/// radius, the minor/major `ratio`, and a parametric angle range.
///
/// `P(t) = center + cos(t) * major_axis + ratio * sin(t) * (normal x major_axis)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point3,
    normal: Vector3,
    major_axis: Vector3,
    ratio: f64,
    start_angle: f64,
    end_angle: f64,
}

impl Ellipse {
    /// Creates a new ellipse with a `+Z` normal.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the ellipse
    /// * `major_axis` - Semi-major axis vector, lying in the XY plane
    /// * `ratio` - Minor/major radius ratio, in `(0, 1]`
    /// * `start_angle` - Start parameter in radians
    /// * `end_angle` - End parameter in radians
    ///
    /// # Errors
    ///
    /// Returns an error if the ratio is out of range, the major axis is
    /// zero-length, or the major axis leaves the XY plane.
    pub fn new(
        center: Point3,
        major_axis: Vector3,
        ratio: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if ratio.is_nan() || ratio <= 0.0 || ratio > 1.0 {
            debug!(ratio, "rejected ellipse ratio");
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "ratio",
                value: ratio,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        if major_axis.norm() == 0.0 {
            return Err(GeometryError::ZeroVector.into());
        }
        if major_axis.z != 0.0 {
            return Err(
                GeometryError::Degenerate("major axis must lie in the XY plane".into()).into(),
            );
        }
        Ok(Self {
            center,
            normal: Vector3::z(),
            major_axis,
            ratio,
            start_angle,
            end_angle,
        })
    }

    /// Creates an ellipse from its radii and the major axis direction in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] for a zero major radius, or
    /// an error from [`Ellipse::new`] when the minor radius exceeds the major.
    pub fn from_axes(
        center: Point3,
        major_radius: f64,
        minor_radius: f64,
        axis_degree: f64,
        start_degree: f64,
        end_degree: f64,
    ) -> Result<Self> {
        if major_radius == 0.0 {
            return Err(GeometryError::DivisionByZero("ellipse ratio").into());
        }
        let theta = degree_to_radian(axis_degree);
        let major_axis = Vector3::new(theta.cos(), theta.sin(), 0.0) * major_radius;
        Self::new(
            center,
            major_axis,
            minor_radius / major_radius,
            degree_to_radian(start_degree),
            degree_to_radian(end_degree),
        )
    }

    /// Creates a full ellipse from both ends of its major axis and its minor radius.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if the endpoints coincide,
    /// or an error from [`Ellipse::new`] for an out-of-range ratio.
    pub fn from_major_axis_endpoints(p1: &Point3, p2: &Point3, minor_radius: f64) -> Result<Self> {
        let center = midpoint(p1, p2);
        let major_length = distance(p1, p2);
        if major_length == 0.0 {
            return Err(GeometryError::DivisionByZero("ellipse ratio").into());
        }
        Self::new(
            center,
            center - p2,
            2.0 * minor_radius / major_length,
            0.0,
            std::f64::consts::TAU,
        )
    }

    /// Creates a full, X-aligned ellipse inscribed in the box spanned by two corners.
    ///
    /// The ratio is `|dy / dx|` and the major axis is always along X, so a box
    /// taller than it is wide is rejected rather than rotated.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if the corners share an X
    /// coordinate, or an error from [`Ellipse::new`] for an out-of-range ratio.
    pub fn from_bounding_points(p1: &Point3, p2: &Point3) -> Result<Self> {
        let dx = p1.x - p2.x;
        if dx == 0.0 {
            return Err(GeometryError::DivisionByZero("ellipse bounding ratio").into());
        }
        let ratio = ((p1.y - p2.y) / dx).abs();
        Self::new(
            midpoint(p1, p2),
            Vector3::new(dx.abs() / 2.0, 0.0, 0.0),
            ratio,
            0.0,
            std::f64::consts::TAU,
        )
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the plane normal, always `+Z`.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the semi-major axis vector.
    #[must_use]
    pub fn major_axis(&self) -> &Vector3 {
        &self.major_axis
    }

    /// Returns the minor/major radius ratio.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Returns the semi-major radius.
    #[must_use]
    pub fn major_radius(&self) -> f64 {
        self.major_axis.norm()
    }

    /// Returns the semi-minor radius.
    #[must_use]
    pub fn minor_radius(&self) -> f64 {
        self.major_radius() * self.ratio
    }

    /// Returns the start parameter in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the end parameter in radians.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    fn minor_axis(&self) -> Vector3 {
        self.normal.cross(&self.major_axis) * self.ratio
    }
}

impl Curve for Ellipse {
    fn evaluate(&self, t: f64) -> Point3 {
        self.center + self.major_axis * t.cos() + self.minor_axis() * t.sin()
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        (self.minor_axis() * t.cos() - self.major_axis * t.sin())
            .try_normalize(0.0)
            .ok_or_else(|| GeometryError::ZeroVector.into())
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.end_angle)
    }

    fn is_closed(&self) -> bool {
        (self.end_angle - self.start_angle).abs() >= std::f64::consts::TAU
    }
}
