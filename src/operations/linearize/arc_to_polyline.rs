use crate::error::Result;
use crate::geometry::{Arc, Curve, Polyline, PolylineVertex};
use crate::math::arc_2d::{bulge_from_sagitta, sagitta};
use crate::math::Point2;

/// Replaces an arc with a single bulge segment between its endpoints.
///
/// The bulge is derived from the chord and its sagitta, which always yields
/// the minor arc through the endpoints. An arc sweeping more than 180 degrees
/// therefore comes back as its shorter complement.
pub struct ArcToPolyline {
    arc: Arc,
}

impl ArcToPolyline {
    /// Creates a new `ArcToPolyline` operation.
    #[must_use]
    pub fn new(arc: Arc) -> Self {
        Self { arc }
    }

    /// Executes the conversion, returning an open two-vertex polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the arc's endpoints coincide.
    pub fn execute(&self) -> Result<Polyline> {
        let start = self.arc.start_point();
        let end = self.arc.end_point();
        let (p1, p2) = (Point2::new(start.x, start.y), Point2::new(end.x, end.y));

        let chord = (p2 - p1).norm();
        let height = sagitta(self.arc.radius(), chord)?;
        let bulge = bulge_from_sagitta(chord, height)?;

        Polyline::new(
            vec![PolylineVertex::new(p1, bulge), PolylineVertex::line(p2)],
            false,
            0.0,
        )
    }
}
