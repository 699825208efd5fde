use std::f64::consts::PI;

use tracing::debug;

use super::{angle_between, Point3, Tolerance};
use crate::error::{GeometryError, Result};

/// Distance between two points as the drafting tools have always measured it.
///
/// The Z term squares `z1 + z2` rather than the difference. Every planar
/// caller passes `z = 0`, where this equals the Euclidean distance; with
/// non-zero Z it does not. Use [`distance_xy`] for a true planar distance.
#[must_use]
pub fn distance(p1: &Point3, p2: &Point3) -> f64 {
    ((p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2) + (p1.z + p2.z).powi(2)).sqrt()
}

/// Euclidean distance between the XY projections of two points.
#[must_use]
pub fn distance_xy(p1: &Point3, p2: &Point3) -> f64 {
    (p1.x - p2.x).hypot(p1.y - p2.y)
}

/// Returns the point halfway between `p1` and `p2`.
#[must_use]
pub fn midpoint(p1: &Point3, p2: &Point3) -> Point3 {
    Point3::new(
        (p1.x + p2.x) / 2.0,
        (p1.y + p2.y) / 2.0,
        (p1.z + p2.z) / 2.0,
    )
}

/// Tests whether `a`, `b` and `c` lie on one line.
///
/// Compares the angle between `b -> a` and `b -> c` against `0` and `pi`
/// using `tol.angular`. With [`Tolerance::EXACT`] only exactly representable
/// alignments are detected.
#[must_use]
pub fn is_collinear(a: &Point3, b: &Point3, c: &Point3, tol: Tolerance) -> bool {
    let angle = angle_between(&(a - b), &(c - b));
    tol.angles_equal(angle, 0.0) || tol.angles_equal(angle, PI)
}

/// Fits the circle through three points in the XY plane.
///
/// Returns `(center, radius)`. The center takes `p1.z`.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if the points admit no finite circle.
pub fn circumcircle_xy(p1: &Point3, p2: &Point3, p3: &Point3) -> Result<(Point3, f64)> {
    // Work relative to p1 to keep the squared terms small.
    let (bx, by) = (p2.x - p1.x, p2.y - p1.y);
    let (cx, cy) = (p3.x - p1.x, p3.y - p1.y);
    let det = 2.0 * (bx * cy - by * cx);
    if det == 0.0 {
        debug!(?p1, ?p2, ?p3, "circumcircle of aligned points");
        return Err(GeometryError::Degenerate("points have no circumscribing circle".into()).into());
    }

    let b_sq = bx * bx + by * by;
    let c_sq = cx * cx + cy * cy;
    let ux = (cy * b_sq - by * c_sq) / det;
    let uy = (bx * c_sq - cx * b_sq) / det;
    if !ux.is_finite() || !uy.is_finite() {
        return Err(GeometryError::Degenerate("circumscribing circle is unbounded".into()).into());
    }

    Ok((Point3::new(p1.x + ux, p1.y + uy, p1.z), ux.hypot(uy)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn planar_distance() {
        assert_relative_eq!(distance(&p(0.0, 0.0), &p(3.0, 4.0)), 5.0);
        assert_relative_eq!(distance_xy(&p(1.0, 1.0), &p(4.0, 5.0)), 5.0);
    }

    #[test]
    fn distance_sums_z_coordinates() {
        let a = Point3::new(0.0, 0.0, 1.0);
        let b = Point3::new(0.0, 0.0, 1.0);
        // Identical points, yet the Z term contributes (1 + 1)^2.
        assert_relative_eq!(distance(&a, &b), 2.0);
        assert_relative_eq!(distance_xy(&a, &b), 0.0);

        let c = Point3::new(3.0, 0.0, 2.0);
        let d = Point3::new(0.0, 4.0, -2.0);
        // Opposite Z values cancel, so only XY remains.
        assert_relative_eq!(distance(&c, &d), 5.0);
    }

    #[test]
    fn midpoint_averages_all_axes() {
        let m = midpoint(&Point3::new(0.0, 2.0, 4.0), &Point3::new(10.0, -2.0, 0.0));
        assert_relative_eq!(m, Point3::new(5.0, 0.0, 2.0));
    }

    #[test]
    fn collinear_midpoint() {
        assert!(is_collinear(&p(0.0, 0.0), &p(5.0, 0.0), &p(10.0, 0.0), Tolerance::EXACT));
    }

    #[test]
    fn collinear_outside_segment() {
        assert!(is_collinear(&p(0.0, 0.0), &p(10.0, 0.0), &p(5.0, 0.0), Tolerance::EXACT));
    }

    #[test]
    fn triangle_is_not_collinear() {
        assert!(!is_collinear(&p(0.0, 0.0), &p(5.0, 5.0), &p(10.0, 0.0), Tolerance::EXACT));
        assert!(!is_collinear(&p(0.0, 0.0), &p(5.0, 5.0), &p(10.0, 0.0), Tolerance::STANDARD));
    }

    #[test]
    fn nearly_collinear_depends_on_tolerance() {
        // Bends the line by roughly 4e-7 radians at `b`.
        let (a, b, c) = (p(0.0, 0.0), p(5.0, 1e-6), p(10.0, 0.0));
        assert!(!is_collinear(&a, &b, &c, Tolerance::EXACT));
        assert!(is_collinear(&a, &b, &c, Tolerance::new(0.0, 1e-6).unwrap()));
    }

    #[test]
    fn coincident_points_are_collinear() {
        assert!(is_collinear(&p(1.0, 1.0), &p(1.0, 1.0), &p(3.0, 7.0), Tolerance::EXACT));
    }

    #[test]
    fn circumcircle_of_right_triangle() {
        let (center, radius) = circumcircle_xy(&p(0.0, 0.0), &p(4.0, 0.0), &p(0.0, 3.0)).unwrap();
        assert_relative_eq!(center, p(2.0, 1.5), epsilon = 1e-12);
        assert_relative_eq!(radius, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn circumcircle_keeps_first_z() {
        let (center, _) = circumcircle_xy(
            &Point3::new(1.0, 0.0, 7.0),
            &Point3::new(0.0, 1.0, 7.0),
            &Point3::new(-1.0, 0.0, 7.0),
        )
        .unwrap();
        assert_relative_eq!(center, Point3::new(0.0, 0.0, 7.0), epsilon = 1e-12);
    }

    #[test]
    fn circumcircle_of_aligned_points_fails() {
        assert!(circumcircle_xy(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0)).is_err());
    }
}
