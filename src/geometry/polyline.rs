use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::arc_2d::arc_from_bulge;
use crate::math::{degree_to_radian, Point2, Vector2};

/// Bulge-encoded polyline vertex for mixed line/arc segments.
///
/// `bulge = tan(included_angle / 4)` of the segment leaving this vertex:
/// - `0` = straight line to next vertex
/// - `> 0` = counter-clockwise arc to next vertex
/// - `< 0` = clockwise arc to next vertex
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineVertex {
    pub position: Point2,
    pub bulge: f64,
}

impl PolylineVertex {
    /// Creates a new vertex with the given position and bulge.
    #[must_use]
    pub fn new(position: Point2, bulge: f64) -> Self {
        Self { position, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(position: Point2) -> Self {
        Self {
            position,
            bulge: 0.0,
        }
    }
}

/// A planar polyline with mixed straight-line and circular-arc segments.
///
/// Holds at least two vertices. For closed polylines the last vertex
/// connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    vertices: Vec<PolylineVertex>,
    closed: bool,
    constant_width: f64,
}

impl Polyline {
    /// Creates a polyline from bulge-encoded vertices.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if fewer than two vertices are given.
    pub fn new(vertices: Vec<PolylineVertex>, closed: bool, constant_width: f64) -> Result<Self> {
        if vertices.len() < 2 {
            debug!(count = vertices.len(), "rejected polyline vertex count");
            return Err(OperationError::InvalidInput(format!(
                "polyline needs at least 2 vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        Ok(Self {
            vertices,
            closed,
            constant_width,
        })
    }

    /// Creates a straight-segment polyline through `points`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if fewer than two points are given.
    pub fn from_points(points: &[Point2], closed: bool, constant_width: f64) -> Result<Self> {
        let vertices = points.iter().copied().map(PolylineVertex::line).collect();
        Self::new(vertices, closed, constant_width)
    }

    /// Creates the closed axis-aligned rectangle spanned by two opposite corners.
    ///
    /// Vertices run `(min_x, max_y)`, `(max_x, max_y)`, `(max_x, min_y)`, `(min_x, min_y)`.
    #[must_use]
    pub fn rectangle(corner1: &Point2, corner2: &Point2) -> Self {
        let (min_x, max_x) = (corner1.x.min(corner2.x), corner1.x.max(corner2.x));
        let (min_y, max_y) = (corner1.y.min(corner2.y), corner1.y.max(corner2.y));
        let vertices = [
            Point2::new(min_x, max_y),
            Point2::new(max_x, max_y),
            Point2::new(max_x, min_y),
            Point2::new(min_x, min_y),
        ]
        .into_iter()
        .map(PolylineVertex::line)
        .collect();
        Self {
            vertices,
            closed: true,
            constant_width: 0.0,
        }
    }

    /// Creates a closed regular polygon inscribed in the circle of `radius`
    /// about `center`, its first vertex at `start_degree` degrees.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if `side_count < 3`, or
    /// [`GeometryError::ParameterOutOfRange`] if the radius is not strictly positive.
    pub fn regular_polygon(
        center: &Point2,
        radius: f64,
        side_count: usize,
        start_degree: f64,
    ) -> Result<Self> {
        if radius.is_nan() || radius <= 0.0 {
            debug!(radius, "rejected polygon radius");
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "radius",
                value: radius,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        if side_count < 3 {
            debug!(side_count, "rejected polygon side count");
            return Err(OperationError::InvalidInput(format!(
                "polygon needs at least 3 sides, got {side_count}"
            ))
            .into());
        }
        let start = degree_to_radian(start_degree);
        #[allow(clippy::cast_precision_loss)]
        let step = std::f64::consts::TAU / side_count as f64;
        let vertices = (0..side_count)
            .map(|k| {
                #[allow(clippy::cast_precision_loss)]
                let angle = start + k as f64 * step;
                PolylineVertex::line(*center + Vector2::new(angle.cos(), angle.sin()) * radius)
            })
            .collect();
        Ok(Self {
            vertices,
            closed: true,
            constant_width: 0.0,
        })
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[PolylineVertex] {
        &self.vertices
    }

    /// Returns mutable access to the vertices for in-place edits.
    ///
    /// The vertex count cannot change through this slice.
    pub fn vertices_mut(&mut self) -> &mut [PolylineVertex] {
        &mut self.vertices
    }

    /// Returns whether the last vertex connects back to the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the constant segment width.
    #[must_use]
    pub fn constant_width(&self) -> f64 {
        self.constant_width
    }

    /// Returns a copy with the given constant width.
    #[must_use]
    pub fn with_constant_width(mut self, width: f64) -> Self {
        self.constant_width = width;
        self
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        if self.closed {
            self.vertices.len()
        } else {
            self.vertices.len() - 1
        }
    }

    /// Expands the polyline to points, replacing arc segments with chords.
    ///
    /// `tolerance` is the largest allowed gap between an arc and its chords.
    /// Closed polylines repeat the first point at the end.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let n = self.vertices.len();
        let mut points = Vec::with_capacity(n * 2);
        points.push(self.vertices[0].position);

        for i in 0..self.segment_count() {
            let v0 = &self.vertices[i];
            let v1 = &self.vertices[(i + 1) % n];

            if let Some(arc) = arc_from_bulge(&v0.position, &v1.position, v0.bulge) {
                let n_sub = arc_subdivision_count(arc.radius, arc.sweep.abs(), tolerance);
                for j in 1..n_sub {
                    points.push(arc.point_at(f64::from(j) / f64::from(n_sub)));
                }
            }
            points.push(v1.position);
        }

        points
    }
}

/// Upper bound on chords per arc segment.
const MAX_ARC_SUBDIVISIONS: u32 = 1024;

/// Computes the number of chords needed to approximate an arc
/// within the given tolerance, capped at [`MAX_ARC_SUBDIVISIONS`].
fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // sagitta = r * (1 - cos(theta/2)), solved for theta.
    let max_angle = if tolerance >= radius {
        std::f64::consts::PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    // Tolerances far below the radius round `max_angle` to zero.
    if max_angle <= 0.0 || !max_angle.is_finite() {
        return MAX_ARC_SUBDIVISIONS;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.clamp(1, MAX_ARC_SUBDIVISIONS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pt(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn from_points_creates_line_only() {
        let pline = Polyline::from_points(&[pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0)], false, 0.5)
            .unwrap();
        assert_eq!(pline.vertices().len(), 3);
        assert_eq!(pline.segment_count(), 2);
        assert_relative_eq!(pline.constant_width(), 0.5);
        assert!(pline.vertices().iter().all(|v| v.bulge == 0.0));
    }

    #[test]
    fn from_points_closed() {
        let pline = Polyline::from_points(&[pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0)], true, 0.0)
            .unwrap();
        assert_eq!(pline.segment_count(), 3);
    }

    #[test]
    fn fewer_than_two_points_fail() {
        assert!(Polyline::from_points(&[], false, 0.0).is_err());
        assert!(Polyline::from_points(&[pt(1.0, 1.0)], true, 0.0).is_err());
    }

    #[test]
    fn rectangle_from_any_corner_pair() {
        let a = Polyline::rectangle(&pt(4.0, 0.0), &pt(0.0, 3.0));
        let b = Polyline::rectangle(&pt(0.0, 3.0), &pt(4.0, 0.0));
        assert_eq!(a, b);
        assert!(a.is_closed());
        let corners: Vec<_> = a.vertices().iter().map(|v| v.position).collect();
        assert_eq!(corners, vec![pt(0.0, 3.0), pt(4.0, 3.0), pt(4.0, 0.0), pt(0.0, 0.0)]);
    }

    #[test]
    fn square_polygon_vertices() {
        let poly = Polyline::regular_polygon(&pt(0.0, 0.0), 1.0, 4, 0.0).unwrap();
        assert!(poly.is_closed());
        let expected = [pt(1.0, 0.0), pt(0.0, 1.0), pt(-1.0, 0.0), pt(0.0, -1.0)];
        for (v, e) in poly.vertices().iter().zip(expected) {
            assert_relative_eq!(v.position, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn polygon_sides_are_equal() {
        let poly = Polyline::regular_polygon(&pt(2.0, -1.0), 3.0, 7, 15.0).unwrap();
        let pts = poly.to_points(0.01);
        assert_eq!(pts.len(), 8);
        let first = (pts[1] - pts[0]).norm();
        for w in pts.windows(2) {
            assert_relative_eq!((w[1] - w[0]).norm(), first, epsilon = 1e-12);
        }
    }

    #[test]
    fn polygon_with_bad_radius_fails() {
        for radius in [0.0, -1.0, f64::NAN] {
            let err = Polyline::regular_polygon(&pt(0.0, 0.0), radius, 5, 0.0).unwrap_err();
            assert!(matches!(
                err,
                crate::DraftError::Geometry(GeometryError::ParameterOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn polygon_with_two_sides_fails() {
        assert!(Polyline::regular_polygon(&pt(0.0, 0.0), 1.0, 2, 0.0).is_err());
        assert!(Polyline::regular_polygon(&pt(0.0, 0.0), 1.0, 0, 0.0).is_err());
    }

    #[test]
    fn to_points_semicircle_arc() {
        let pline = Polyline::new(
            vec![
                PolylineVertex::new(pt(0.0, 0.0), 1.0),
                PolylineVertex::line(pt(2.0, 0.0)),
            ],
            false,
            0.0,
        )
        .unwrap();
        let pts = pline.to_points(0.01);
        assert!(pts.len() > 2, "expected more than 2 points, got {}", pts.len());
        assert_relative_eq!(pts[0], pt(0.0, 0.0));
        assert_relative_eq!(*pts.last().unwrap(), pt(2.0, 0.0));
        for q in &pts {
            assert_relative_eq!((q - pt(1.0, 0.0)).norm(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn width_can_be_replaced() {
        let pline = Polyline::rectangle(&pt(0.0, 0.0), &pt(1.0, 1.0)).with_constant_width(0.25);
        assert_relative_eq!(pline.constant_width(), 0.25);
    }

    #[test]
    fn arc_subdivision_count_large_tolerance() {
        assert_eq!(arc_subdivision_count(1.0, std::f64::consts::PI, 10.0), 1);
    }

    #[test]
    fn arc_subdivision_count_small_tolerance() {
        let n = arc_subdivision_count(1.0, std::f64::consts::PI, 0.001);
        assert!(n > 10, "expected many subdivisions, got {n}");
    }

    #[test]
    fn arc_subdivision_count_tiny_tolerance_is_capped() {
        let n = arc_subdivision_count(1.0, std::f64::consts::PI, 1e-17);
        assert_eq!(n, MAX_ARC_SUBDIVISIONS);
        let n = arc_subdivision_count(1.0, std::f64::consts::PI, 1e-9);
        assert!(n <= MAX_ARC_SUBDIVISIONS);
    }
}
