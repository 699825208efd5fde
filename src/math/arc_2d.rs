//! 2D arc/bulge math utilities.
//!
//! Bulge convention: `bulge = tan(included_angle / 4)`.
//! - `bulge = 0`: straight line
//! - `bulge > 0`: counter-clockwise arc
//! - `bulge < 0`: clockwise arc
//! - `|bulge| = 1`: semicircle

use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// An arc segment recovered from two vertices and a bulge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulgeArc {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    /// Signed included angle, positive counter-clockwise.
    pub sweep: f64,
}

impl BulgeArc {
    /// Evaluates the arc at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = self.start_angle + self.sweep * t;
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }
}

/// Bulge of the arc with the given chord length and sagitta.
///
/// `bulge = sagitta / (chord / 2)`, which equals `tan(included_angle / 4)`
/// for arcs up to a semicircle.
///
/// # Errors
///
/// Returns [`GeometryError::DivisionByZero`] for a zero-length chord.
pub fn bulge_from_sagitta(chord: f64, sagitta: f64) -> Result<f64> {
    if chord == 0.0 {
        return Err(GeometryError::DivisionByZero("bulge of a zero-length chord").into());
    }
    Ok(2.0 * sagitta / chord)
}

/// Sagitta of the minor arc of radius `radius` spanning a chord of `chord`.
///
/// A chord exceeding the diameter by rounding error only is treated as the
/// diameter.
///
/// # Errors
///
/// Returns [`GeometryError::ParameterOutOfRange`] if the chord is longer than
/// the diameter.
pub fn sagitta(radius: f64, chord: f64) -> Result<f64> {
    let half = chord / 2.0;
    let under = radius * radius - half * half;
    if under < -TOLERANCE * radius * radius {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "chord",
            value: chord,
            min: 0.0,
            max: 2.0 * radius,
        }
        .into());
    }
    Ok(radius - under.max(0.0).sqrt())
}

/// Converts a bulge-defined segment to center-radius-angle form.
///
/// Returns `None` for a zero-length chord or a zero bulge (straight segment).
#[must_use]
pub fn arc_from_bulge(p0: &Point2, p1: &Point2, bulge: f64) -> Option<BulgeArc> {
    let chord = p1 - p0;
    let chord_len = chord.norm();
    if chord_len < 1e-12 || bulge == 0.0 {
        return None;
    }

    // Center lies on the chord's perpendicular bisector, left of the chord
    // for positive bulge.
    let offset = (1.0 - bulge * bulge) / (2.0 * bulge) * (chord_len * 0.5);
    let normal = Vector2::new(-chord.y, chord.x) / chord_len;
    let center = p0 + chord * 0.5 + normal * offset;

    // r = d*(1+b^2)/(4*|b|), from r = d/(2*sin(theta/2)) with theta = 4*atan(b)
    let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());
    let start_angle = (p0.y - center.y).atan2(p0.x - center.x);

    Some(BulgeArc {
        center,
        radius,
        start_angle,
        sweep: 4.0 * bulge.atan(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-10;

    #[test]
    fn semicircle_ccw_runs_below_chord() {
        let arc = arc_from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), 1.0).unwrap();
        assert_relative_eq!(arc.center, Point2::new(1.0, 0.0), epsilon = TOL);
        assert_relative_eq!(arc.radius, 1.0, epsilon = TOL);
        assert_relative_eq!(arc.sweep, PI, epsilon = TOL);
        assert_relative_eq!(arc.point_at(0.5), Point2::new(1.0, -1.0), epsilon = TOL);
        assert_relative_eq!(arc.point_at(1.0), Point2::new(2.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn semicircle_cw_runs_above_chord() {
        let arc = arc_from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), -1.0).unwrap();
        assert_relative_eq!(arc.sweep, -PI, epsilon = TOL);
        assert_relative_eq!(arc.point_at(0.5), Point2::new(1.0, 1.0), epsilon = TOL);
    }

    #[test]
    fn quarter_circle_ccw() {
        let bulge = (PI / 8.0).tan();
        let arc = arc_from_bulge(&Point2::new(1.0, 0.0), &Point2::new(0.0, 1.0), bulge).unwrap();
        assert_relative_eq!(arc.center, Point2::origin(), epsilon = 1e-9);
        assert_relative_eq!(arc.radius, 1.0, epsilon = 1e-9);
        let mid = arc.point_at(0.5);
        let expected = (PI / 4.0).cos();
        assert_relative_eq!(mid, Point2::new(expected, expected), epsilon = 1e-9);
    }

    #[test]
    fn straight_or_empty_segment_has_no_arc() {
        assert!(arc_from_bulge(&Point2::new(0.0, 0.0), &Point2::new(1.0, 0.0), 0.0).is_none());
        assert!(arc_from_bulge(&Point2::new(1.0, 1.0), &Point2::new(1.0, 1.0), 0.5).is_none());
    }

    #[test]
    fn sagitta_of_semicircle_is_radius() {
        assert_relative_eq!(sagitta(3.0, 6.0).unwrap(), 3.0);
        assert_relative_eq!(bulge_from_sagitta(6.0, 3.0).unwrap(), 1.0);
    }

    #[test]
    fn sagitta_bulge_matches_quarter_angle() {
        // 90 degree arc on the unit circle.
        let chord = 2.0_f64.sqrt();
        let bulge = bulge_from_sagitta(chord, sagitta(1.0, chord).unwrap()).unwrap();
        assert_relative_eq!(bulge, (PI / 8.0).tan(), epsilon = 1e-12);
    }

    #[test]
    fn rounded_diameter_chord_is_accepted() {
        let chord = 2.0 * (1.0 + 1e-15);
        assert_relative_eq!(sagitta(1.0, chord).unwrap(), 1.0);
    }

    #[test]
    fn chord_longer_than_diameter() {
        assert!(sagitta(1.0, 2.5).is_err());
    }

    #[test]
    fn zero_chord_bulge_fails() {
        assert!(bulge_from_sagitta(0.0, 0.0).is_err());
    }
}
