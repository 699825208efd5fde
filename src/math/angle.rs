//! Angle conversions and signed/unsigned vector angles.
//!
//! Angles are in radians unless a name says otherwise. Curve math is planar,
//! so the signed angle helpers look at the XY components only for the sign.

use std::f64::consts::PI;

use super::{Point3, Vector3};

/// Converts degrees to radians.
#[must_use]
pub fn degree_to_radian(degree: f64) -> f64 {
    degree * PI / 180.0
}

/// Converts radians to degrees.
#[must_use]
pub fn radian_to_degree(radian: f64) -> f64 {
    radian * 180.0 / PI
}

/// Returns the unsigned angle between two vectors, in `[0, pi]`.
///
/// A zero-length vector yields `0`.
#[must_use]
pub fn angle_between(a: &Vector3, b: &Vector3) -> f64 {
    a.angle(b)
}

/// Returns the signed angle of the vector `from -> to` measured from +X.
///
/// The result lies in `(-pi, pi]`: the unsigned angle to +X, negated when the
/// vector points below the X axis.
#[must_use]
pub fn angle_to_x_axis(from: &Point3, to: &Point3) -> f64 {
    let v = to - from;
    let angle = angle_between(&Vector3::x(), &v);
    if v.y < 0.0 {
        -angle
    } else {
        angle
    }
}
