use crate::error::Result;
use crate::geometry::{Circle, Polyline, PolylineVertex};
use crate::math::Point2;

/// Replaces a circle with two counter-clockwise half-circle bulge segments.
///
/// The result is open, with the first vertex repeated at the end to close
/// the outline: `(cx + r, cy)`, `(cx - r, cy)`, `(cx + r, cy)`, each with
/// bulge `1`.
pub struct CircleToPolyline {
    circle: Circle,
}

impl CircleToPolyline {
    /// Creates a new `CircleToPolyline` operation.
    #[must_use]
    pub fn new(circle: Circle) -> Self {
        Self { circle }
    }

    /// Executes the conversion, returning a three-vertex polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the polyline cannot be assembled.
    pub fn execute(&self) -> Result<Polyline> {
        let c = self.circle.center();
        let r = self.circle.radius();
        let right = Point2::new(c.x + r, c.y);
        let left = Point2::new(c.x - r, c.y);

        Polyline::new(
            vec![
                PolylineVertex::new(right, 1.0),
                PolylineVertex::new(left, 1.0),
                PolylineVertex::new(right, 1.0),
            ],
            false,
            0.0,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    #[test]
    fn three_vertices_with_unit_bulge() {
        let circle = Circle::new(Point3::new(1.0, 2.0, 0.0), 3.0).unwrap();
        let pline = CircleToPolyline::new(circle).execute().unwrap();
        let positions: Vec<_> = pline.vertices().iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![Point2::new(4.0, 2.0), Point2::new(-2.0, 2.0), Point2::new(4.0, 2.0)]
        );
        assert!(pline.vertices().iter().all(|v| v.bulge == 1.0));
        assert!(!pline.is_closed());
        assert_eq!(pline.segment_count(), 2);
    }

    #[test]
    fn outline_covers_the_full_circle() {
        let circle = Circle::new(Point3::new(-1.0, 0.5, 0.0), 2.0).unwrap();
        let pts = CircleToPolyline::new(circle).execute().unwrap().to_points(1e-3);
        let center = Point2::new(-1.0, 0.5);
        for p in &pts {
            assert_relative_eq!((p - center).norm(), 2.0, epsilon = 1e-9);
        }
        // Passes through both the top and the bottom of the circle.
        assert!(pts.iter().any(|p| (p - Point2::new(-1.0, 2.5)).norm() < 0.1));
        assert!(pts.iter().any(|p| (p - Point2::new(-1.0, -1.5)).norm() < 0.1));
    }

    #[test]
    fn tiny_tolerance_keeps_point_count_bounded() {
        let circle = Circle::new(Point3::origin(), 1.0).unwrap();
        let pts = CircleToPolyline::new(circle).execute().unwrap().to_points(1e-17);
        assert!(pts.len() <= 2 * 1024 + 1, "got {} points", pts.len());
        assert!(pts.len() > 3);
    }
}
